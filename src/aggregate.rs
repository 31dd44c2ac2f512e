use std::collections::BTreeMap;

use crate::models::DailyRecord;

/// Reduces hourly samples to one record per calendar day: arithmetic mean of
/// that day's pressures rounded to one decimal, joined with the daily weather
/// code by exact date-string match. Output is sorted by date ascending
/// (lexical order is chronological for zero-padded ISO dates).
///
/// Hourly timestamps without a matching pressure sample are skipped; an empty
/// hourly series yields an empty result.
pub fn build_daily_records(
    hourly_times: &[String],
    pressures: &[f64],
    daily_times: &[String],
    daily_codes: &[Option<i64>],
) -> Vec<DailyRecord> {
    let mut buckets: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (time, pressure) in hourly_times.iter().zip(pressures) {
        let date = time.split('T').next().unwrap_or_default();
        buckets.entry(date).or_default().push(*pressure);
    }

    let codes: BTreeMap<&str, i64> = daily_times
        .iter()
        .zip(daily_codes)
        .filter_map(|(date, code)| code.map(|code| (date.as_str(), code)))
        .collect();

    buckets
        .into_iter()
        .map(|(date, samples)| {
            let mean = samples.iter().sum::<f64>() / samples.len() as f64;
            DailyRecord {
                date: date.to_string(),
                average_pressure: (mean * 10.0).round() / 10.0,
                weathercode: codes.get(date).copied(),
            }
        })
        .collect()
}
