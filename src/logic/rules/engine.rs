use super::{
    rainfall::{BeneficialRainRule, HeavyRainRule},
    temperature_stress::{ColdStressRule, HeatStressRule},
    thunderstorm::ThunderstormRule,
    DayConditions, Rule,
};
use crate::models::{CropImpact, ForecastDay, ImpactKind};

/// Ordered crop-impact rules. The first rule that matches decides the day;
/// a day no rule matches is `Favorable`.
pub struct ImpactEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl ImpactEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(ThunderstormRule),
            Box::new(HeavyRainRule),
            Box::new(BeneficialRainRule),
            Box::new(HeatStressRule),
            Box::new(ColdStressRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, day: &DayConditions) -> CropImpact {
        let kind = self
            .rules
            .iter()
            .find_map(|rule| {
                let kind = rule.evaluate(day)?;
                tracing::trace!(rule = rule.id(), ?kind, "Crop impact rule matched");
                Some(kind)
            })
            .unwrap_or(ImpactKind::Favorable);

        CropImpact::new(kind)
    }

    pub fn evaluate_day(&self, day: &ForecastDay) -> CropImpact {
        self.evaluate(&DayConditions::from_forecast(day))
    }

    pub fn evaluate_rule(&self, rule_id: &str, day: &DayConditions) -> Option<ImpactKind> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(day))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }

    /// How many of `days` each rule would match on its own, ignoring the
    /// first-match order.
    pub fn match_counts(&self, days: &[ForecastDay]) -> Vec<(&'static str, usize)> {
        let conditions: Vec<_> = days.iter().map(DayConditions::from_forecast).collect();
        self.list_rules()
            .into_iter()
            .map(|(id, name)| {
                let count = conditions
                    .iter()
                    .filter(|day| self.evaluate_rule(id, day).is_some())
                    .count();
                (name, count)
            })
            .collect()
    }
}

impl Default for ImpactEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Crop impact for a forecast day using the standard rule order
pub fn crop_impact(day: &ForecastDay) -> CropImpact {
    ImpactEngine::new().evaluate_day(day)
}
