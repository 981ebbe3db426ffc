use super::{DayConditions, Rule};
use crate::models::ImpactKind;

/// Rain chance above this means fields need drainage attention
const HEAVY_RAIN_CHANCE: f64 = 70.0;
/// Rainy days above this chance are counted as useful irrigation
const USEFUL_RAIN_CHANCE: f64 = 40.0;

/// Very likely rain: manage field water levels.
pub struct HeavyRainRule;

impl Rule for HeavyRainRule {
    fn id(&self) -> &'static str {
        "heavy_rain"
    }

    fn name(&self) -> &'static str {
        "Heavy Rain"
    }

    fn evaluate(&self, day: &DayConditions) -> Option<ImpactKind> {
        (day.rain_chance > HEAVY_RAIN_CHANCE).then_some(ImpactKind::ManageWater)
    }
}

/// Moderate rain on a rainy day helps growth.
pub struct BeneficialRainRule;

impl Rule for BeneficialRainRule {
    fn id(&self) -> &'static str {
        "beneficial_rain"
    }

    fn name(&self) -> &'static str {
        "Beneficial Rain"
    }

    fn evaluate(&self, day: &DayConditions) -> Option<ImpactKind> {
        (day.icon.contains("rain") && day.rain_chance > USEFUL_RAIN_CHANCE)
            .then_some(ImpactKind::GoodForGrowth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(icon: &str, rain_chance: f64) -> DayConditions<'_> {
        DayConditions {
            icon,
            rain_chance,
            temp: Some(25.0),
        }
    }

    #[test]
    fn heavy_rain_threshold_is_exclusive() {
        assert!(HeavyRainRule.evaluate(&day("cloudy", 70.0)).is_none());
        assert_eq!(
            HeavyRainRule.evaluate(&day("cloudy", 70.5)),
            Some(ImpactKind::ManageWater)
        );
    }

    #[test]
    fn beneficial_rain_needs_rain_code() {
        assert_eq!(
            BeneficialRainRule.evaluate(&day("rain", 50.0)),
            Some(ImpactKind::GoodForGrowth)
        );
        assert!(BeneficialRainRule.evaluate(&day("cloudy", 50.0)).is_none());
        assert!(BeneficialRainRule.evaluate(&day("rain", 40.0)).is_none());
        // showers-day does not contain "rain"
        assert!(BeneficialRainRule.evaluate(&day("showers-day", 60.0)).is_none());
    }
}
