use super::calculations::{reading_or, round_half_up};
use super::rules::ImpactEngine;
use super::sunshine::forecast_sunshine;
use crate::models::{CropImpact, ForecastDay, WeatherIcon};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One line of the multi-day forecast table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRow {
    pub date: Option<NaiveDate>,
    /// Today / Tomorrow / weekday
    pub day_label: String,
    /// e.g. "May 5"
    pub date_label: String,
    pub icon: WeatherIcon,
    pub condition: String,
    pub high_temp: Option<i64>,
    pub low_temp: Option<i64>,
    pub rain_chance: i64,
    pub humidity: Option<f64>,
    pub sunshine_hours: i64,
    pub wind_speed: Option<i64>,
    pub crop_impact: CropImpact,
}

/// Farming advice for the first forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldAdvice {
    PrepareForRain,
    InspectFields,
}

impl FieldAdvice {
    pub fn for_rain_chance(rain_chance: i64) -> Self {
        if rain_chance > 50 {
            FieldAdvice::PrepareForRain
        } else {
            FieldAdvice::InspectFields
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldAdvice::PrepareForRain => "Prepare for rain. Check the field drainage system.",
            FieldAdvice::InspectFields => {
                "Good day for a field inspection. Check water levels in the afternoon."
            }
        }
    }
}

impl std::fmt::Display for FieldAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today.succ_opt() == Some(date) {
        return "Tomorrow".to_string();
    }
    date.format("%A").to_string()
}

pub fn date_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%B"), date.day())
}

fn round_reading(value: Option<f64>, field: &str) -> Option<i64> {
    super::calculations::finite_reading(value, field).map(|v| round_half_up(v) as i64)
}

pub fn build_row(day: &ForecastDay, today: NaiveDate, engine: &ImpactEngine) -> ForecastRow {
    let date = NaiveDate::parse_from_str(&day.datetime, "%Y-%m-%d").ok();
    let (day_label, date_label) = match date {
        Some(d) => (day_label(d, today), date_label(d)),
        None => {
            tracing::warn!("Unparsable forecast date '{}'", day.datetime);
            (day.datetime.clone(), String::new())
        }
    };

    ForecastRow {
        date,
        day_label,
        date_label,
        icon: WeatherIcon::from_code(day.icon_code()),
        condition: day.conditions.clone().unwrap_or_default(),
        high_temp: round_reading(day.tempmax, "tempmax"),
        low_temp: round_reading(day.tempmin, "tempmin"),
        rain_chance: round_half_up(reading_or(day.precipprob, 0.0, "precipprob")) as i64,
        humidity: super::calculations::finite_reading(day.humidity, "humidity"),
        sunshine_hours: forecast_sunshine(day),
        wind_speed: round_reading(day.windspeed, "windspeed"),
        crop_impact: engine.evaluate_day(day),
    }
}

/// Rows for at most `limit` days, in payload order
pub fn build_rows(days: &[ForecastDay], today: NaiveDate, limit: usize) -> Vec<ForecastRow> {
    let engine = ImpactEngine::new();
    days.iter()
        .take(limit)
        .map(|day| build_row(day, today, &engine))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImpactKind;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn day(datetime: &str, icon: &str, precipprob: f64) -> ForecastDay {
        ForecastDay {
            datetime: datetime.into(),
            tempmax: Some(33.4),
            tempmin: Some(25.5),
            temp: Some(29.0),
            humidity: Some(82.0),
            precipprob: Some(precipprob),
            windspeed: Some(17.6),
            cloudcover: Some(60.0),
            conditions: Some("Rain, Partially cloudy".into()),
            icon: Some(icon.into()),
        }
    }

    #[test]
    fn day_labels() {
        let today = date("2025-05-06");
        assert_eq!(day_label(today, today), "Today");
        assert_eq!(day_label(date("2025-05-07"), today), "Tomorrow");
        // 2025-05-08 is a Thursday
        assert_eq!(day_label(date("2025-05-08"), today), "Thursday");
        assert_eq!(date_label(date("2025-05-05")), "May 5");
    }

    #[test]
    fn row_fields() {
        let engine = ImpactEngine::new();
        let row = build_row(&day("2025-05-06", "rain", 60.0), date("2025-05-06"), &engine);
        assert_eq!(row.day_label, "Today");
        assert_eq!(row.date_label, "May 6");
        assert_eq!(row.high_temp, Some(33));
        assert_eq!(row.low_temp, Some(26));
        assert_eq!(row.rain_chance, 60);
        assert_eq!(row.wind_speed, Some(18));
        assert_eq!(row.sunshine_hours, 2);
        assert_eq!(row.icon, WeatherIcon::Rain);
        assert_eq!(row.crop_impact.kind, ImpactKind::GoodForGrowth);
    }

    #[test]
    fn bad_date_keeps_raw_label() {
        let engine = ImpactEngine::new();
        let row = build_row(&day("soon", "clear-day", 0.0), date("2025-05-06"), &engine);
        assert!(row.date.is_none());
        assert_eq!(row.day_label, "soon");
    }

    #[test]
    fn rows_are_limited() {
        let days: Vec<_> = (1..=20)
            .map(|d| day(&format!("2025-05-{:02}", d), "cloudy", 10.0))
            .collect();
        let rows = build_rows(&days, date("2025-05-01"), 15);
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0].day_label, "Today");
        assert_eq!(rows[14].date_label, "May 15");
    }

    #[test]
    fn field_advice_threshold() {
        assert_eq!(FieldAdvice::for_rain_chance(51), FieldAdvice::PrepareForRain);
        assert_eq!(FieldAdvice::for_rain_chance(50), FieldAdvice::InspectFields);
    }
}
