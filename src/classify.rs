use serde::{Deserialize, Serialize};

/// Coarse weather category derived from a WMO weather code.
/// See: https://open-meteo.com/en/docs#weathervariables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Other,
}

/// Disjoint code sets. Codes outside every set classify as `Other`.
const CODE_SETS: &[(WeatherKind, &[i64])] = &[
    (WeatherKind::Clear, &[0]),
    (WeatherKind::Cloudy, &[1, 2, 3]),
    (WeatherKind::Fog, &[45, 48]),
    (
        WeatherKind::Rain,
        &[51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82],
    ),
    (WeatherKind::Snow, &[71, 73, 75, 77, 85, 86]),
];

impl WeatherKind {
    pub fn from_code(code: Option<i64>) -> Self {
        let Some(code) = code else {
            return Self::Other;
        };
        CODE_SETS
            .iter()
            .find(|(_, codes)| codes.contains(&code))
            .map(|(kind, _)| *kind)
            .unwrap_or(Self::Other)
    }

    /// Background tint for chart bands and table cells.
    pub fn band_color(self) -> &'static str {
        match self {
            Self::Clear => "#fff9c4",
            Self::Cloudy => "#cfd8dc",
            Self::Fog => "#b0bec5",
            Self::Rain => "#90caf9",
            Self::Snow => "#81d4fa",
            Self::Other => "transparent",
        }
    }
}
