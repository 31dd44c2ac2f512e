pub fn render_index(start_date: &str, end_date: &str) -> String {
    INDEX_HTML
        .replace("{{START}}", start_date)
        .replace("{{END}}", end_date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pressure Diary</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #36a2eb;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 18px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .view-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 300px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 2.5;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      font-size: 0.85rem;
      color: #6b645d;
    }

    .legend .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 5px;
      vertical-align: -1px;
      border: 1px solid rgba(47, 72, 88, 0.15);
    }

    .data-table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.92rem;
    }

    .data-table th,
    .data-table td {
      padding: 8px 10px;
      text-align: left;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    .data-table th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }

    .data-table tr.today td {
      background: rgba(54, 162, 235, 0.1);
      font-weight: 600;
    }

    .data-table select,
    .data-table input {
      font: inherit;
      padding: 5px 8px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 8px;
      background: white;
      color: var(--ink);
    }

    .data-table input {
      width: 100%;
      min-width: 160px;
    }

    .weather-cell {
      text-align: center;
      min-width: 48px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: #c63b2b;
    }

    .status[data-type='ok'] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Pressure Diary</h1>
        <p class="subtitle">Mean sea-level pressure for Tokyo, {{START}} to {{END}}, with your daily condition notes.</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-view="chart" role="tab" aria-selected="true">Chart</button>
        <button class="tab" type="button" data-view="table" role="tab" aria-selected="false">Table</button>
      </div>
    </header>

    <section class="view-card" id="chartContainer">
      <svg id="chart" viewBox="0 0 640 300" aria-label="Daily average pressure" role="img"></svg>
      <div class="legend" id="legend"></div>
    </section>

    <section class="view-card" id="tableContainer" style="display: none;">
      <table class="data-table">
        <thead>
          <tr>
            <th>Date</th>
            <th>Avg pressure (hPa)</th>
            <th>Condition</th>
            <th>Memo</th>
            <th>Weather</th>
          </tr>
        </thead>
        <tbody id="dataBody"></tbody>
      </table>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Condition scores and memos are saved per calendar day as you edit them. Column tints follow the day's weather.</p>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const legendEl = document.getElementById('legend');
    const tbodyEl = document.getElementById('dataBody');
    const statusEl = document.getElementById('status');
    const chartContainer = document.getElementById('chartContainer');
    const tableContainer = document.getElementById('tableContainer');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const scoreLabels = { 1: 'bad', 2: 'somewhat bad', 3: 'normal', 4: 'somewhat good', 5: 'good' };
    const scoreColors = { 1: '#d32f2f', 2: '#f57c00', 3: '#666666', 4: '#388e3c', 5: '#1976d2' };
    const categoryNames = { clear: 'Clear', cloudy: 'Cloudy', fog: 'Fog', rain: 'Rain', snow: 'Snow' };

    let pressureData = null;
    let symptomDays = {};

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const entryFor = (date) => {
      const entry = symptomDays[date] || {};
      return { score: entry.score ?? 3, memo: entry.memo ?? '' };
    };

    const formatAxisValue = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderChart = () => {
      const days = pressureData.days;
      if (!days.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        legendEl.innerHTML = '';
        return;
      }

      const width = 640;
      const height = 300;
      const paddingX = 46;
      const paddingY = 36;
      const top = 18;

      const values = days.map((day) => day.average_pressure);
      const min = Math.min(...values) - 5;
      const max = Math.max(...values) + 5;
      const range = max - min;

      const bandWidth = (width - paddingX * 2) / days.length;
      const x = (index) => paddingX + bandWidth * (index + 0.5);
      const y = (value) => height - paddingY - ((value - min) / range) * (height - top - paddingY);

      const bands = days
        .map((day, index) => {
          if (day.band_color === 'transparent') {
            return '';
          }
          const left = (paddingX + bandWidth * index).toFixed(2);
          return `<rect x='${left}' y='${top}' width='${bandWidth.toFixed(2)}' height='${(height - top - paddingY).toFixed(2)}' fill='${day.band_color}' />`;
        })
        .join('');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class='chart-grid' x1='${paddingX}' y1='${yPos}' x2='${width - paddingX}' y2='${yPos}' />`;
        grid += `<text class='chart-label' x='${paddingX - 10}' y='${yPos + 4}' text-anchor='end'>${formatAxisValue(value)}</text>`;
      }

      const path = days
        .map((day, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(day.average_pressure).toFixed(2)}`)
        .join(' ');

      const labelEvery = Math.max(1, Math.ceil(days.length / 10));
      const xLabels = days
        .map((day, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          const label = parseInt(day.date.slice(8), 10);
          return `<text class='chart-label' x='${x(index)}' y='${height - paddingY + 18}' text-anchor='middle'>${label}</text>`;
        })
        .join('');

      const circles = days
        .map((day, index) => {
          const color = scoreColors[entryFor(day.date).score] || scoreColors[3];
          return `<circle cx='${x(index)}' cy='${y(day.average_pressure)}' r='4.5' fill='${color}' stroke='white' stroke-width='1.5' />`;
        })
        .join('');

      chartEl.innerHTML = `${bands}${grid}<path class='chart-line' d='${path}' />${circles}${xLabels}`;

      const seen = new Map();
      days.forEach((day) => {
        if (day.band_color !== 'transparent' && !seen.has(day.category)) {
          seen.set(day.category, day.band_color);
        }
      });
      legendEl.innerHTML = Array.from(seen)
        .map(([category, color]) => `<span><span class='swatch' style='background:${color}'></span>${categoryNames[category] || category}</span>`)
        .join('');
    };

    const renderTable = () => {
      tbodyEl.innerHTML = '';
      pressureData.days.forEach((day) => {
        const entry = entryFor(day.date);
        const tr = document.createElement('tr');
        if (day.date === pressureData.end_date) {
          tr.classList.add('today');
        }

        const dateTd = document.createElement('td');
        dateTd.textContent = `${day.date} (${day.weekday})`;

        const avgTd = document.createElement('td');
        avgTd.textContent = day.average_pressure.toFixed(1);

        const scoreTd = document.createElement('td');
        const select = document.createElement('select');
        [1, 2, 3, 4, 5].forEach((value) => {
          const option = document.createElement('option');
          option.value = value;
          option.textContent = `${value} (${scoreLabels[value]})`;
          select.appendChild(option);
        });
        select.value = entry.score;
        select.addEventListener('change', (event) => {
          save({ date: day.date, score: Number(event.target.value) });
        });
        scoreTd.appendChild(select);

        const memoTd = document.createElement('td');
        const input = document.createElement('input');
        input.type = 'text';
        input.maxLength = 100;
        input.placeholder = 'Memo (100 chars max)';
        input.value = entry.memo;
        input.addEventListener('input', (event) => {
          save({ date: day.date, memo: event.target.value });
        });
        memoTd.appendChild(input);

        const weatherTd = document.createElement('td');
        weatherTd.classList.add('weather-cell');
        weatherTd.style.backgroundColor = day.band_color;
        weatherTd.textContent = day.weathercode !== null ? day.weathercode : '-';

        tr.appendChild(dateTd);
        tr.appendChild(avgTd);
        tr.appendChild(scoreTd);
        tr.appendChild(memoTd);
        tr.appendChild(weatherTd);
        tbodyEl.appendChild(tr);
      });
    };

    const save = async (payload) => {
      setStatus('Saving...', '');
      try {
        const res = await fetch('/api/symptom', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Save failed');
        }
        const saved = await res.json();
        symptomDays[saved.date] = { score: saved.score, memo: saved.memo };
        if ('score' in payload) {
          renderChart();
        }
        setStatus('Saved', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const setView = (view) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.view === view;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      chartContainer.style.display = view === 'chart' ? 'block' : 'none';
      tableContainer.style.display = view === 'table' ? 'block' : 'none';
    };

    const load = async () => {
      const [pressureRes, symptomsRes] = await Promise.all([
        fetch('/api/pressure'),
        fetch('/api/symptoms')
      ]);
      if (!pressureRes.ok) {
        throw new Error((await pressureRes.text()) || 'Unable to load pressure data');
      }
      if (!symptomsRes.ok) {
        throw new Error((await symptomsRes.text()) || 'Unable to load symptom data');
      }
      pressureData = await pressureRes.json();
      symptomDays = (await symptomsRes.json()).days;
      renderChart();
      renderTable();
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setView(button.dataset.view));
    });

    setView('chart');
    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
