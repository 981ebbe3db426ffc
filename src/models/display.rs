use serde::{Deserialize, Serialize};

/// Qualitative band attached to a display value or score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    // Weather bands
    TooHot,
    SlightlyHigh,
    TooCold,
    TooHumid,
    Dry,
    Excessive,
    Adequate,
    Favorable,
    Insufficient,
    Caution,
    Calm,
    // Sky
    Rainy,
    Cloudy,
    Clear,
    Mixed,
    // Scores
    Excellent,
    Good,
    Moderate,
    Poor,
    VeryHigh,
    High,
    Low,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::TooHot => "Too hot",
            Status::SlightlyHigh => "Slightly high",
            Status::TooCold => "Too cold",
            Status::TooHumid => "Too humid",
            Status::Dry => "Dry",
            Status::Excessive => "Excessive",
            Status::Adequate => "Adequate",
            Status::Favorable => "Favorable",
            Status::Insufficient => "Insufficient",
            Status::Caution => "Caution",
            Status::Calm => "Calm",
            Status::Rainy => "Rainy",
            Status::Cloudy => "Cloudy",
            Status::Clear => "Clear",
            Status::Mixed => "Mixed",
            Status::Excellent => "Excellent",
            Status::Good => "Good",
            Status::Moderate => "Moderate",
            Status::Poor => "Poor",
            Status::VeryHigh => "Very high",
            Status::High => "High",
            Status::Low => "Low",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current conditions reduced to the values shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFields {
    /// °C, rounded
    pub temperature: i64,
    pub feels_like: Option<i64>,
    /// %, rounded
    pub humidity: i64,
    pub dew: Option<f64>,
    /// mm
    pub rainfall: f64,
    /// %
    pub rain_chance: f64,
    /// Estimated hours, from cloud cover
    pub sunshine: f64,
    pub uv_index: f64,
    /// km/h, rounded
    pub wind_speed: i64,
    pub wind_direction: Option<f64>,
    pub cloud_cover: f64,
    pub conditions: String,
}

/// Status band for each display value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStatus {
    pub temperature: Status,
    pub humidity: Status,
    pub rainfall: Status,
    pub sunshine: Status,
    pub wind: Status,
    pub sky: Status,
}
