use crate::models::DiaryData;
use crate::weather::WeatherClient;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub symptoms: Arc<Mutex<DiaryData>>,
    pub weather: WeatherClient,
}

impl AppState {
    pub fn new(data_path: PathBuf, symptoms: DiaryData, weather: WeatherClient) -> Self {
        Self {
            data_path,
            symptoms: Arc::new(Mutex::new(symptoms)),
            weather,
        }
    }
}
