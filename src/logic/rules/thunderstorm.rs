use super::{DayConditions, Rule};
use crate::models::ImpactKind;

/// Any thunder in the condition code outranks every other signal.
pub struct ThunderstormRule;

impl Rule for ThunderstormRule {
    fn id(&self) -> &'static str {
        "thunderstorm"
    }

    fn name(&self) -> &'static str {
        "Thunderstorm"
    }

    fn evaluate(&self, day: &DayConditions) -> Option<ImpactKind> {
        day.icon
            .contains("thunder")
            .then_some(ImpactKind::Thunderstorm)
    }
}
