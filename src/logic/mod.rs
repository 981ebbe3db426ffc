pub mod calculations;
pub mod crop_health;
pub mod dashboard;
pub mod forecast;
pub mod normalizer;
pub mod rules;
pub mod sunshine;

pub use crop_health::calculate_crop_health;
pub use dashboard::Dashboard;
pub use normalizer::normalize;
pub use rules::ImpactEngine;
pub use sunshine::estimate_sunshine_hours;
