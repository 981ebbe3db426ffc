//! Weather-driven crop health scoring.
//!
//! Feed a weather payload (current conditions plus daily forecast) through
//! [`logic::Dashboard::build`] to get display values, a crop-health index,
//! and a per-day crop-impact assessment.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;
