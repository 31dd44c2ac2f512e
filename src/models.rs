use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classify::WeatherKind;

pub const DEFAULT_SCORE: u8 = 3;
pub const MEMO_MAX_CHARS: usize = 100;

fn default_score() -> u8 {
    DEFAULT_SCORE
}

/// One day's self-reported condition. Absent fields deserialize to what a
/// never-edited day would hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomEntry {
    #[serde(default = "default_score")]
    pub score: u8,
    #[serde(default)]
    pub memo: String,
}

impl Default for SymptomEntry {
    fn default() -> Self {
        Self {
            score: DEFAULT_SCORE,
            memo: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiaryData {
    pub days: BTreeMap<String, SymptomEntry>,
}

/// Per-day mean pressure joined with that day's weather code.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: String,
    pub average_pressure: f64,
    pub weathercode: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SymptomRequest {
    pub date: String,
    pub score: Option<u8>,
    pub memo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SymptomResponse {
    pub date: String,
    pub score: u8,
    pub memo: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SymptomsResponse {
    pub days: BTreeMap<String, SymptomEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayPoint {
    pub date: String,
    pub weekday: String,
    pub average_pressure: f64,
    pub weathercode: Option<i64>,
    pub category: WeatherKind,
    pub band_color: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PressureResponse {
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<DayPoint>,
}
