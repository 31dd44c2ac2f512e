use chrono::{Duration, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;

pub const LATITUDE: f64 = 35.6895;
pub const LONGITUDE: f64 = 139.6917;
pub const TIMEZONE: &str = "Asia/Tokyo";

/// How far back the fetch window reaches.
pub const FETCH_DAYS: i64 = 30;

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather api returned status {0}")]
    Status(StatusCode),
    #[error("weather response has no hourly data")]
    MissingHourly,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    hourly: Option<HourlyBlock>,
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub pressure_msl: Vec<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DailyBlock {
    pub time: Vec<String>,
    pub weathercode: Vec<Option<i64>>,
}

#[derive(Debug)]
pub struct Forecast {
    pub hourly: HourlyBlock,
    pub daily: DailyBlock,
}

/// Open-Meteo client pinned to one coordinate. One attempt per call, no
/// retry, no client-side timeout beyond the transport's own.
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Fetches hourly mean-sea-level pressure and daily weather codes for
    /// the inclusive date range.
    pub async fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Forecast, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", LATITUDE.to_string()),
                ("longitude", LONGITUDE.to_string()),
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
                ("hourly", "pressure_msl".to_string()),
                ("daily", "weathercode".to_string()),
                ("timezone", TIMEZONE.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let raw: RawForecast = response.json().await?;
        let hourly = raw.hourly.ok_or(WeatherError::MissingHourly)?;

        Ok(Forecast {
            hourly,
            daily: raw.daily.unwrap_or_default(),
        })
    }
}

/// Inclusive fetch window ending today.
pub fn fetch_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(FETCH_DAYS), today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn window_spans_thirty_days_back() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let (start, end) = fetch_window(today);
        assert_eq!(end, today);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
    }

    #[tokio::test]
    async fn fetch_range_parses_hourly_and_daily_blocks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("hourly", "pressure_msl"))
            .and(query_param("daily", "weathercode"))
            .and(query_param("timezone", TIMEZONE))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hourly": {
                    "time": ["2024-01-01T00:00", "2024-01-01T01:00"],
                    "pressure_msl": [1003.5, 1004.0]
                },
                "daily": {
                    "time": ["2024-01-01"],
                    "weathercode": [61]
                }
            })))
            .mount(&server)
            .await;

        let client = WeatherClient::new(server.uri());
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let forecast = client.fetch_range(start, start).await.unwrap();

        assert_eq!(forecast.hourly.time.len(), 2);
        assert_eq!(forecast.hourly.pressure_msl, vec![1003.5, 1004.0]);
        assert_eq!(forecast.daily.weathercode, vec![Some(61)]);
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced_with_its_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = WeatherClient::new(server.uri());
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = client.fetch_range(start, start).await.unwrap_err();

        match err {
            WeatherError::Status(status) => assert_eq!(status.as_u16(), 503),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_hourly_block_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "daily": { "time": [], "weathercode": [] } })),
            )
            .mount(&server)
            .await;

        let client = WeatherClient::new(server.uri());
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = client.fetch_range(start, start).await.unwrap_err();

        assert!(matches!(err, WeatherError::MissingHourly));
    }
}
