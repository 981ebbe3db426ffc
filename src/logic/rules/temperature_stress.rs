use super::{DayConditions, Rule};
use crate::models::ImpactKind;

/// Heat stress above 35°C.
pub struct HeatStressRule;

impl Rule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "Heat Stress"
    }

    fn evaluate(&self, day: &DayConditions) -> Option<ImpactKind> {
        let temp = day.temp?;
        (temp > 35.0).then_some(ImpactKind::HeatStress)
    }
}

/// Cold stress below 15°C.
pub struct ColdStressRule;

impl Rule for ColdStressRule {
    fn id(&self) -> &'static str {
        "cold_stress"
    }

    fn name(&self) -> &'static str {
        "Cold Stress"
    }

    fn evaluate(&self, day: &DayConditions) -> Option<ImpactKind> {
        let temp = day.temp?;
        (temp < 15.0).then_some(ImpactKind::ColdStress)
    }
}
