use super::calculations::{clamp_score, reading_or};
use super::normalizer::{DEFAULT_CLOUD_COVER, DEFAULT_HUMIDITY, DEFAULT_PRECIP_MM, DEFAULT_TEMP_C};
use crate::models::{CropHealthIndex, WeatherObservation, GROWTH_STAGE};

/// The four weather readings the crop-health heuristics look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthInputs {
    pub temp: f64,
    pub humidity: f64,
    pub precip: f64,
    pub cloud_cover: f64,
}

impl HealthInputs {
    pub fn from_observation(obs: &WeatherObservation) -> Self {
        Self {
            temp: reading_or(obs.temp, DEFAULT_TEMP_C, "temp"),
            humidity: reading_or(obs.humidity, DEFAULT_HUMIDITY, "humidity"),
            precip: reading_or(obs.precip, DEFAULT_PRECIP_MM, "precip"),
            cloud_cover: reading_or(obs.cloudcover, DEFAULT_CLOUD_COVER, "cloudcover"),
        }
    }
}

/// Score crop health from current conditions.
///
/// Returns `None` when there is no observation yet; callers show that as
/// "data not available".
pub fn calculate_crop_health(obs: Option<&WeatherObservation>) -> Option<CropHealthIndex> {
    let inputs = HealthInputs::from_observation(obs?);
    let index = score(&inputs);
    tracing::debug!(?inputs, ?index, "Crop health scored");
    Some(index)
}

pub fn score(inputs: &HealthInputs) -> CropHealthIndex {
    CropHealthIndex {
        growth_rate: clamp_score(growth_rate(inputs)),
        water_level: clamp_score(water_level(inputs)),
        pest_risk: clamp_score(pest_risk(inputs)),
        disease_risk: clamp_score(disease_risk(inputs)),
        growth_stage: GROWTH_STAGE.to_string(),
    }
}

// Rice grows best at 25-30°C and 70-80% humidity. The temperature and
// humidity adjustments stack.
fn growth_rate(i: &HealthInputs) -> i32 {
    let mut rate = 80;

    if i.temp > 35.0 {
        rate -= 15;
    } else if i.temp < 20.0 {
        rate -= 20;
    } else if (25.0..=30.0).contains(&i.temp) {
        rate += 10;
    }

    if i.humidity > 85.0 {
        rate -= 5;
    } else if i.humidity < 60.0 {
        rate -= 10;
    } else if (70.0..=80.0).contains(&i.humidity) {
        rate += 5;
    }

    rate
}

fn pest_risk(i: &HealthInputs) -> i32 {
    let mut risk = 30;
    if i.humidity > 80.0 && i.temp > 30.0 {
        risk += 25;
    } else if i.humidity > 70.0 && i.temp > 28.0 {
        risk += 15;
    }
    risk
}

fn disease_risk(i: &HealthInputs) -> i32 {
    let mut risk = 20;
    if i.humidity > 85.0 && i.precip > 5.0 {
        risk += 30;
    } else if i.humidity > 75.0 && i.precip > 2.0 {
        risk += 15;
    }
    risk
}

fn water_level(i: &HealthInputs) -> i32 {
    let mut level = 65;
    if i.precip > 10.0 {
        level += 25;
    } else if i.precip > 5.0 {
        level += 15;
    } else if i.precip < 1.0 && i.cloud_cover < 30.0 {
        // sunny and dry
        level -= 10;
    }
    level
}
