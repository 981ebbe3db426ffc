use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactSeverity {
    Positive,
    Medium,
    High,
}

impl ImpactSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactSeverity::Positive => "Positive",
            ImpactSeverity::Medium => "Medium",
            ImpactSeverity::High => "High",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ImpactSeverity::Positive => "✓",
            ImpactSeverity::Medium => "⚠",
            ImpactSeverity::High => "!",
        }
    }
}

impl std::fmt::Display for ImpactSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactKind {
    Thunderstorm,
    ManageWater,
    GoodForGrowth,
    HeatStress,
    ColdStress,
    Favorable,
}

impl ImpactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactKind::Thunderstorm => "Take precautions",
            ImpactKind::ManageWater => "Manage water",
            ImpactKind::GoodForGrowth => "Good for growth",
            ImpactKind::HeatStress => "Heat stress risk",
            ImpactKind::ColdStress => "Cold stress risk",
            ImpactKind::Favorable => "Favorable",
        }
    }

    pub fn severity(&self) -> ImpactSeverity {
        match self {
            ImpactKind::Thunderstorm | ImpactKind::HeatStress => ImpactSeverity::High,
            ImpactKind::ManageWater | ImpactKind::ColdStress => ImpactSeverity::Medium,
            ImpactKind::GoodForGrowth | ImpactKind::Favorable => ImpactSeverity::Positive,
        }
    }
}

/// Qualitative effect of one forecast day on the crop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropImpact {
    pub kind: ImpactKind,
    pub label: String,
    pub severity: ImpactSeverity,
}

impl CropImpact {
    pub fn new(kind: ImpactKind) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            severity: kind.severity(),
        }
    }
}

impl From<ImpactKind> for CropImpact {
    fn from(kind: ImpactKind) -> Self {
        Self::new(kind)
    }
}

impl std::fmt::Display for CropImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.severity.symbol(), self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_kind() {
        assert_eq!(
            CropImpact::new(ImpactKind::Thunderstorm).severity,
            ImpactSeverity::High
        );
        assert_eq!(
            CropImpact::new(ImpactKind::ManageWater).severity,
            ImpactSeverity::Medium
        );
        assert_eq!(
            CropImpact::new(ImpactKind::GoodForGrowth).severity,
            ImpactSeverity::Positive
        );
        assert_eq!(
            CropImpact::new(ImpactKind::ColdStress).severity,
            ImpactSeverity::Medium
        );
    }

    #[test]
    fn severity_ordering() {
        assert!(ImpactSeverity::High > ImpactSeverity::Medium);
        assert!(ImpactSeverity::Medium > ImpactSeverity::Positive);
    }

    #[test]
    fn impact_display() {
        let impact = CropImpact::from(ImpactKind::HeatStress);
        assert_eq!(impact.to_string(), "! Heat stress risk");
        assert_eq!(impact.severity, ImpactSeverity::High);
    }
}
