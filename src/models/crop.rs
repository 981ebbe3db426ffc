use super::display::Status;
use serde::{Deserialize, Serialize};

/// Growth stage shown alongside every index. Not derived from weather.
pub const GROWTH_STAGE: &str = "Vegetative stage (45 days)";

/// Care checklist for the vegetative stage
pub const GROWTH_STAGE_CARE: [&str; 3] = [
    "Keep 2-3 cm of standing water in the field",
    "Watch for yellowing leaves (nitrogen deficiency)",
    "Apply the second nitrogen dose",
];

/// Heuristic crop-health scores, each in 0..=100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropHealthIndex {
    pub growth_rate: u8,
    pub water_level: u8,
    pub pest_risk: u8,
    pub disease_risk: u8,
    pub growth_stage: String,
}

impl CropHealthIndex {
    pub fn growth_status(&self) -> Status {
        match self.growth_rate {
            81.. => Status::Excellent,
            61..=80 => Status::Good,
            41..=60 => Status::Moderate,
            _ => Status::Poor,
        }
    }

    pub fn water_status(&self) -> Status {
        match self.water_level {
            81.. => Status::Excessive,
            61..=80 => Status::Adequate,
            41..=60 => Status::Moderate,
            _ => Status::Insufficient,
        }
    }

    pub fn pest_status(&self) -> Status {
        risk_status(self.pest_risk)
    }

    pub fn disease_status(&self) -> Status {
        risk_status(self.disease_risk)
    }
}

fn risk_status(risk: u8) -> Status {
    match risk {
        71.. => Status::VeryHigh,
        51..=70 => Status::High,
        31..=50 => Status::Moderate,
        _ => Status::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(growth_rate: u8, water_level: u8, pest_risk: u8, disease_risk: u8) -> CropHealthIndex {
        CropHealthIndex {
            growth_rate,
            water_level,
            pest_risk,
            disease_risk,
            growth_stage: GROWTH_STAGE.to_string(),
        }
    }

    #[test]
    fn growth_status_bands() {
        assert_eq!(index(95, 0, 0, 0).growth_status(), Status::Excellent);
        assert_eq!(index(80, 0, 0, 0).growth_status(), Status::Good);
        assert_eq!(index(55, 0, 0, 0).growth_status(), Status::Moderate);
        assert_eq!(index(40, 0, 0, 0).growth_status(), Status::Poor);
    }

    #[test]
    fn water_status_bands() {
        assert_eq!(index(0, 90, 0, 0).water_status(), Status::Excessive);
        assert_eq!(index(0, 65, 0, 0).water_status(), Status::Adequate);
        assert_eq!(index(0, 55, 0, 0).water_status(), Status::Moderate);
        assert_eq!(index(0, 40, 0, 0).water_status(), Status::Insufficient);
    }

    #[test]
    fn risk_status_bands() {
        assert_eq!(index(0, 0, 30, 0).pest_status(), Status::Low);
        assert_eq!(index(0, 0, 45, 0).pest_status(), Status::Moderate);
        assert_eq!(index(0, 0, 55, 0).pest_status(), Status::High);
        assert_eq!(index(0, 0, 0, 71).disease_status(), Status::VeryHigh);
    }
}
