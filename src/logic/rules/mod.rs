pub mod engine;
pub mod rainfall;
pub mod temperature_stress;
pub mod thunderstorm;

pub use engine::ImpactEngine;

use crate::models::{ForecastDay, ImpactKind};

/// The weather facts a crop-impact rule looks at for one forecast day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayConditions<'a> {
    /// Condition code such as `thunder-rain` or `partly-cloudy-day`
    pub icon: &'a str,
    /// Probability of precipitation, 0-100
    pub rain_chance: f64,
    /// °C; `None` disables the temperature rules
    pub temp: Option<f64>,
}

impl<'a> DayConditions<'a> {
    pub fn from_forecast(day: &'a ForecastDay) -> Self {
        Self {
            icon: day.icon_code(),
            rain_chance: super::calculations::reading_or(day.precipprob, 0.0, "precipprob"),
            temp: super::calculations::finite_reading(day.representative_temp(), "temp"),
        }
    }
}

/// Trait for crop-impact rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Return the impact if this rule's conditions are met
    fn evaluate(&self, day: &DayConditions) -> Option<ImpactKind>;
}
