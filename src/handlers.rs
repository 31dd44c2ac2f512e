use crate::aggregate::build_daily_records;
use crate::classify::WeatherKind;
use crate::errors::AppError;
use crate::models::{
    DailyRecord, DayPoint, PressureResponse, SymptomRequest, SymptomResponse, SymptomsResponse,
    MEMO_MAX_CHARS,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use crate::weather::fetch_window;
use axum::{extract::State, response::Html, Json};
use chrono::{Local, NaiveDate};
use tracing::warn;

pub async fn index() -> Html<String> {
    let (start, end) = fetch_window(Local::now().date_naive());
    Html(render_index(&start.to_string(), &end.to_string()))
}

pub async fn get_pressure(State(state): State<AppState>) -> Result<Json<PressureResponse>, AppError> {
    let (start, end) = fetch_window(Local::now().date_naive());
    let forecast = match state.weather.fetch_range(start, end).await {
        Ok(forecast) => forecast,
        Err(err) => {
            warn!("weather fetch failed: {err}");
            return Err(err.into());
        }
    };

    let records = build_daily_records(
        &forecast.hourly.time,
        &forecast.hourly.pressure_msl,
        &forecast.daily.time,
        &forecast.daily.weathercode,
    );

    Ok(Json(PressureResponse {
        start_date: start.to_string(),
        end_date: end.to_string(),
        days: records.into_iter().map(to_day_point).collect(),
    }))
}

pub async fn get_symptoms(State(state): State<AppState>) -> Result<Json<SymptomsResponse>, AppError> {
    let data = state.symptoms.lock().await;
    Ok(Json(SymptomsResponse {
        days: data.days.clone(),
    }))
}

pub async fn set_symptom(
    State(state): State<AppState>,
    Json(payload): Json<SymptomRequest>,
) -> Result<Json<SymptomResponse>, AppError> {
    if NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }
    if let Some(score) = payload.score {
        if !(1..=5).contains(&score) {
            return Err(AppError::bad_request("score must be between 1 and 5"));
        }
    }
    if let Some(memo) = &payload.memo {
        if memo.chars().count() > MEMO_MAX_CHARS {
            return Err(AppError::bad_request("memo must be 100 characters or fewer"));
        }
    }

    let mut data = state.symptoms.lock().await;
    let updated = {
        let entry = data.days.entry(payload.date.clone()).or_default();
        if let Some(score) = payload.score {
            entry.score = score;
        }
        if let Some(memo) = payload.memo {
            entry.memo = memo;
        }
        entry.clone()
    };

    persist_data(&state.data_path, &data).await?;

    Ok(Json(SymptomResponse {
        date: payload.date,
        score: updated.score,
        memo: updated.memo,
    }))
}

fn to_day_point(record: DailyRecord) -> DayPoint {
    let category = WeatherKind::from_code(record.weathercode);
    let weekday = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
        .map(|date| date.format("%a").to_string())
        .unwrap_or_default();

    DayPoint {
        weekday,
        average_pressure: record.average_pressure,
        weathercode: record.weathercode,
        category,
        band_color: category.band_color().to_string(),
        date: record.date,
    }
}
