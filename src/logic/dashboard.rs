use super::crop_health::calculate_crop_health;
use super::forecast::{build_rows, FieldAdvice, ForecastRow};
use super::normalizer::{display_status, normalize};
use super::sunshine::SunshineEstimates;
use crate::models::{CropHealthIndex, DisplayFields, DisplayStatus, WeatherPayload};
use chrono::NaiveDate;
use serde::Serialize;

/// Current-conditions section of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSection {
    pub display: DisplayFields,
    pub status: DisplayStatus,
    pub sunshine: SunshineEstimates,
    pub crop_health: CropHealthIndex,
}

/// Everything the dashboard renders, derived from one weather payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub location: Option<String>,
    /// `None` until current conditions are available
    pub current: Option<CurrentSection>,
    pub forecast: Vec<ForecastRow>,
    pub advice: Option<FieldAdvice>,
}

impl Dashboard {
    pub fn build(payload: &WeatherPayload, today: NaiveDate, forecast_days: usize) -> Self {
        let current = payload.current_conditions.as_ref().and_then(|obs| {
            let crop_health = calculate_crop_health(Some(obs))?;
            let display = normalize(obs);
            Some(CurrentSection {
                status: display_status(&display),
                sunshine: SunshineEstimates::for_observation(obs),
                display,
                crop_health,
            })
        });

        if current.is_none() {
            tracing::info!("No current conditions in payload");
        }

        let forecast = build_rows(&payload.days, today, forecast_days);
        let advice = forecast
            .first()
            .map(|row| FieldAdvice::for_rain_chance(row.rain_chance));

        tracing::debug!(
            forecast_rows = forecast.len(),
            has_current = current.is_some(),
            "Dashboard built"
        );

        Self {
            location: payload.location().map(str::to_string),
            current,
            forecast,
            advice,
        }
    }

    pub fn has_data(&self) -> bool {
        self.current.is_some() || !self.forecast.is_empty()
    }
}
