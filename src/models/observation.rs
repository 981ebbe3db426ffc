use serde::{Deserialize, Serialize};

/// Current weather conditions as delivered by the Visual Crossing timeline API.
///
/// Every numeric field may be missing; the normalizer and the scoring
/// functions substitute documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherObservation {
    pub temp: Option<f64>,
    pub feelslike: Option<f64>,
    pub humidity: Option<f64>,
    pub dew: Option<f64>,
    pub precip: Option<f64>,
    pub precipprob: Option<f64>,
    pub cloudcover: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddir: Option<f64>,
    pub uvindex: Option<f64>,
    pub conditions: Option<String>,
    pub icon: Option<String>,
}

/// A single forecast day (`days[]` entry).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastDay {
    pub datetime: String,
    pub tempmax: Option<f64>,
    pub tempmin: Option<f64>,
    /// Mean temperature for the day
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub precipprob: Option<f64>,
    pub windspeed: Option<f64>,
    pub cloudcover: Option<f64>,
    pub conditions: Option<String>,
    pub icon: Option<String>,
}

impl ForecastDay {
    /// Temperature used by the crop-impact rules: the daily mean, or the
    /// midpoint of max/min when the mean is not reported.
    pub fn representative_temp(&self) -> Option<f64> {
        self.temp.or(match (self.tempmax, self.tempmin) {
            (Some(max), Some(min)) => Some((max + min) / 2.0),
            (Some(t), None) | (None, Some(t)) => Some(t),
            (None, None) => None,
        })
    }

    pub fn icon_code(&self) -> &str {
        self.icon.as_deref().unwrap_or("")
    }
}

/// Top-level weather response: current conditions plus a daily forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherPayload {
    pub address: Option<String>,
    pub resolved_address: Option<String>,
    pub current_conditions: Option<WeatherObservation>,
    pub days: Vec<ForecastDay>,
}

impl WeatherPayload {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Best human-readable location name in the payload
    pub fn location(&self) -> Option<&str> {
        self.resolved_address
            .as_deref()
            .or(self.address.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Weather icon categories used by the Visual Crossing `icon` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    #[default]
    Cloudy,
    Rain,
    Showers,
    Thunderstorm,
    Snow,
    Fog,
    Wind,
}

impl WeatherIcon {
    /// Unknown codes fall back to `Cloudy`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "clear-day" | "clear-night" => WeatherIcon::Clear,
            "partly-cloudy-day" | "partly-cloudy-night" => WeatherIcon::PartlyCloudy,
            "cloudy" => WeatherIcon::Cloudy,
            "rain" => WeatherIcon::Rain,
            "showers-day" | "showers-night" => WeatherIcon::Showers,
            "thunder-rain" | "thunder-showers-day" | "thunder-showers-night" => {
                WeatherIcon::Thunderstorm
            }
            "snow" | "snow-showers-day" | "snow-showers-night" => WeatherIcon::Snow,
            "fog" => WeatherIcon::Fog,
            "wind" => WeatherIcon::Wind,
            _ => WeatherIcon::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "Clear",
            WeatherIcon::PartlyCloudy => "Partly Cloudy",
            WeatherIcon::Cloudy => "Cloudy",
            WeatherIcon::Rain => "Rain",
            WeatherIcon::Showers => "Showers",
            WeatherIcon::Thunderstorm => "Thunderstorm",
            WeatherIcon::Snow => "Snow",
            WeatherIcon::Fog => "Fog",
            WeatherIcon::Wind => "Wind",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherIcon::Clear => "☀",
            WeatherIcon::PartlyCloudy => "⛅",
            WeatherIcon::Cloudy => "☁",
            WeatherIcon::Rain => "🌧",
            WeatherIcon::Showers => "🌦",
            WeatherIcon::Thunderstorm => "⛈",
            WeatherIcon::Snow => "❄",
            WeatherIcon::Fog => "🌫",
            WeatherIcon::Wind => "💨",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
