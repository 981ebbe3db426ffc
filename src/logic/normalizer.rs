use super::calculations::{finite_reading, reading_or, round_half_up};
use crate::models::{DisplayFields, DisplayStatus, Status, WeatherObservation};

pub const DEFAULT_TEMP_C: f64 = 30.0;
pub const DEFAULT_HUMIDITY: f64 = 70.0;
pub const DEFAULT_PRECIP_MM: f64 = 0.0;
pub const DEFAULT_CLOUD_COVER: f64 = 50.0;

/// Sunshine hours estimated linearly from cloud cover (0% → 10h, 100% → 0h)
pub fn cloud_cover_sunshine(cloud_cover: f64) -> f64 {
    10.0 - cloud_cover / 10.0
}

/// Reduce a raw observation to dashboard display values.
///
/// Missing readings fall back to fixed defaults (30°C, 70% humidity, no rain,
/// 50% cloud cover); nothing here fails.
pub fn normalize(obs: &WeatherObservation) -> DisplayFields {
    let temp = reading_or(obs.temp, DEFAULT_TEMP_C, "temp");
    let humidity = reading_or(obs.humidity, DEFAULT_HUMIDITY, "humidity");
    let cloud_cover = reading_or(obs.cloudcover, DEFAULT_CLOUD_COVER, "cloudcover");

    DisplayFields {
        temperature: round_half_up(temp) as i64,
        feels_like: finite_reading(obs.feelslike, "feelslike").map(|t| round_half_up(t) as i64),
        humidity: round_half_up(humidity) as i64,
        dew: finite_reading(obs.dew, "dew"),
        rainfall: reading_or(obs.precip, DEFAULT_PRECIP_MM, "precip"),
        rain_chance: reading_or(obs.precipprob, 0.0, "precipprob"),
        sunshine: cloud_cover_sunshine(cloud_cover),
        uv_index: reading_or(obs.uvindex, 0.0, "uvindex"),
        wind_speed: round_half_up(reading_or(obs.windspeed, 0.0, "windspeed")) as i64,
        wind_direction: finite_reading(obs.winddir, "winddir"),
        cloud_cover,
        conditions: obs.conditions.clone().unwrap_or_default(),
    }
}

pub fn display_status(fields: &DisplayFields) -> DisplayStatus {
    DisplayStatus {
        temperature: temperature_status(fields.temperature),
        humidity: humidity_status(fields.humidity),
        rainfall: rainfall_status(fields.rainfall),
        sunshine: sunshine_status(fields.sunshine),
        wind: wind_status(fields.wind_speed),
        sky: sky_status(&fields.conditions),
    }
}

/// Rice does best between 25 and 30°C
pub fn temperature_status(temperature: i64) -> Status {
    if temperature > 35 {
        Status::TooHot
    } else if temperature > 30 {
        Status::SlightlyHigh
    } else if temperature < 20 {
        Status::TooCold
    } else {
        Status::Favorable
    }
}

pub fn humidity_status(humidity: i64) -> Status {
    if humidity > 85 {
        Status::TooHumid
    } else if humidity < 60 {
        Status::Dry
    } else {
        Status::Favorable
    }
}

pub fn rainfall_status(rainfall_mm: f64) -> Status {
    if rainfall_mm > 20.0 {
        Status::Excessive
    } else if rainfall_mm > 10.0 {
        Status::Adequate
    } else if rainfall_mm > 0.0 {
        Status::Favorable
    } else {
        Status::Dry
    }
}

pub fn sunshine_status(hours: f64) -> Status {
    if hours > 8.0 {
        Status::Excessive
    } else if hours > 6.0 {
        Status::Adequate
    } else if hours > 3.0 {
        Status::Favorable
    } else {
        Status::Insufficient
    }
}

pub fn wind_status(wind_kmh: i64) -> Status {
    if wind_kmh > 25 {
        Status::Excessive
    } else if wind_kmh > 20 {
        Status::Caution
    } else if wind_kmh < 5 {
        Status::Calm
    } else {
        Status::Favorable
    }
}

pub fn sky_status(conditions: &str) -> Status {
    let conditions = conditions.to_lowercase();
    if conditions.contains("rain") {
        Status::Rainy
    } else if conditions.contains("cloud") {
        Status::Cloudy
    } else if conditions.contains("clear") {
        Status::Clear
    } else {
        Status::Mixed
    }
}
