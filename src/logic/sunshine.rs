use super::calculations::{reading_or, round_half_up};
use super::normalizer::{cloud_cover_sunshine, DEFAULT_CLOUD_COVER};
use crate::models::{ForecastDay, WeatherObservation};
use serde::Serialize;

/// Hours of sunshine implied by an icon code, by prefix. `None` when the
/// code has no fixed estimate.
fn icon_sunshine(icon: &str) -> Option<i64> {
    const TABLE: [(&str, i64); 6] = [
        ("clear", 10),
        ("partly-cloudy", 7),
        ("cloudy", 4),
        ("rain", 2),
        ("showers", 2),
        ("thunder", 1),
    ];

    TABLE
        .iter()
        .find(|(prefix, _)| icon.starts_with(prefix))
        .map(|&(_, hours)| hours)
}

/// Estimate sunshine hours for a forecast day from its icon code, falling
/// back to cloud cover when the code is not recognised.
pub fn estimate_sunshine_hours(icon: &str, cloud_cover: Option<f64>) -> i64 {
    icon_sunshine(icon).unwrap_or_else(|| {
        let cloud_cover = reading_or(cloud_cover, 0.0, "cloudcover");
        round_half_up(10.0 * (1.0 - cloud_cover / 100.0)) as i64
    })
}

pub fn forecast_sunshine(day: &ForecastDay) -> i64 {
    estimate_sunshine_hours(day.icon_code(), day.cloudcover)
}

/// Both sunshine estimates for current conditions.
///
/// The forecast table uses the icon estimate; the current-conditions panel
/// uses the cloud-cover estimate. They are computed independently and can
/// disagree (a clear sky at 20% cloud is 10h by icon, 8h by cloud cover).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunshineEstimates {
    pub cloud_cover_hours: f64,
    pub icon_hours: Option<i64>,
}

impl SunshineEstimates {
    pub fn for_observation(obs: &WeatherObservation) -> Self {
        let cloud_cover = reading_or(obs.cloudcover, DEFAULT_CLOUD_COVER, "cloudcover");
        let icon_hours = obs
            .icon
            .as_deref()
            .map(|icon| estimate_sunshine_hours(icon, obs.cloudcover));

        let estimates = Self {
            cloud_cover_hours: cloud_cover_sunshine(cloud_cover),
            icon_hours,
        };
        if estimates.disagree() {
            tracing::debug!(
                cloud_cover_hours = estimates.cloud_cover_hours,
                icon_hours = ?estimates.icon_hours,
                "Sunshine estimates disagree"
            );
        }
        estimates
    }

    /// True when both estimates exist and differ by half an hour or more
    pub fn disagree(&self) -> bool {
        self.icon_hours
            .map(|h| (h as f64 - self.cloud_cover_hours).abs() >= 0.5)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_prefixes() {
        assert_eq!(estimate_sunshine_hours("clear-day", Some(90.0)), 10);
        assert_eq!(estimate_sunshine_hours("clear-night", None), 10);
        assert_eq!(estimate_sunshine_hours("partly-cloudy-day", Some(0.0)), 7);
        assert_eq!(estimate_sunshine_hours("cloudy", Some(0.0)), 4);
        assert_eq!(estimate_sunshine_hours("rain", Some(0.0)), 2);
        assert_eq!(estimate_sunshine_hours("showers-night", Some(0.0)), 2);
        assert_eq!(estimate_sunshine_hours("thunder-rain", Some(0.0)), 1);
        assert_eq!(estimate_sunshine_hours("thunder-showers-day", Some(0.0)), 1);
    }

    #[test]
    fn unknown_icon_falls_back_to_cloud_cover() {
        assert_eq!(estimate_sunshine_hours("fog", Some(35.0)), 7);
        assert_eq!(estimate_sunshine_hours("wind", Some(100.0)), 0);
        assert_eq!(estimate_sunshine_hours("snow", None), 10);
        assert_eq!(estimate_sunshine_hours("", Some(25.0)), 8);
    }

    #[test]
    fn forecast_and_cloud_cover_estimates_disagree() {
        let obs = WeatherObservation {
            icon: Some("clear-day".into()),
            cloudcover: Some(20.0),
            ..Default::default()
        };
        let estimates = SunshineEstimates::for_observation(&obs);
        assert_eq!(estimates.icon_hours, Some(10));
        assert!((estimates.cloud_cover_hours - 8.0).abs() < 0.001);
        assert!(estimates.disagree());
    }

    #[test]
    fn no_icon_no_disagreement() {
        let obs = WeatherObservation {
            cloudcover: Some(20.0),
            ..Default::default()
        };
        let estimates = SunshineEstimates::for_observation(&obs);
        assert!(estimates.icon_hours.is_none());
        assert!(!estimates.disagree());
    }

    #[test]
    fn forecast_day_uses_icon() {
        let day = ForecastDay {
            icon: Some("partly-cloudy-night".into()),
            cloudcover: Some(90.0),
            ..Default::default()
        };
        assert_eq!(forecast_sunshine(&day), 7);
    }
}
