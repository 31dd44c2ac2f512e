use crate::errors::AppError;
use crate::models::DiaryData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/diary.json"))
}

/// Loads the persisted diary. A missing file is a fresh start; an unreadable
/// or unparseable one is logged and replaced by an empty map, never an error.
pub async fn load_data(path: &Path) -> DiaryData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                DiaryData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => DiaryData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            DiaryData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &DiaryData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SymptomEntry;

    fn scratch_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "pressure_diary_{tag}_{}_{nanos}.json",
            std::process::id()
        ));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let path = scratch_path("missing");
        let data = load_data(&path).await;
        assert!(data.days.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();

        let data = load_data(&path).await;
        assert!(data.days.is_empty());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_entries_round_trip() {
        let path = scratch_path("roundtrip");
        let mut data = DiaryData::default();
        data.days.insert(
            "2024-01-01".to_string(),
            SymptomEntry {
                score: 5,
                memo: "slept well".to_string(),
            },
        );

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;

        let entry = loaded.days.get("2024-01-01").unwrap();
        assert_eq!(entry.score, 5);
        assert_eq!(entry.memo, "slept well");

        let _ = fs::remove_file(&path).await;
    }
}
