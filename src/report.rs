use crate::logic::calculations::gauge_percent;
use crate::logic::dashboard::{CurrentSection, Dashboard};
use crate::logic::forecast::ForecastRow;
use crate::models::{Status, GROWTH_STAGE_CARE};
use std::fmt;

const BAR_WIDTH: usize = 20;

/// One labelled value with a fill bar and status band
pub struct Gauge<'a> {
    title: &'a str,
    value: String,
    max: f64,
    fill: f64,
    status: Status,
}

impl<'a> Gauge<'a> {
    pub fn new(title: &'a str, value: impl Into<String>, status: Status) -> Self {
        Self {
            title,
            value: value.into(),
            max: 100.0,
            fill: 0.0,
            status,
        }
    }

    /// Scale maximum for the bar
    pub fn range(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn fill(mut self, value: f64) -> Self {
        self.fill = value;
        self
    }

    pub fn bar(&self) -> String {
        let ratio = gauge_percent(self.fill, self.max) / 100.0;
        let filled = (BAR_WIDTH as f64 * ratio).round() as usize;
        format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH.saturating_sub(filled))
        )
    }

    pub fn render(&self) -> String {
        format!(
            "  {:<14} {:>9}  {}  {}",
            self.title,
            self.value,
            self.bar(),
            self.status
        )
    }
}

/// Plain-text dashboard report
pub struct Report<'a> {
    dashboard: &'a Dashboard,
    crop_name: &'a str,
    fallback_location: Option<&'a str>,
}

impl<'a> Report<'a> {
    pub fn new(dashboard: &'a Dashboard, crop_name: &'a str) -> Self {
        Self {
            dashboard,
            crop_name,
            fallback_location: None,
        }
    }

    /// Location shown when the payload carries no address
    pub fn fallback_location(mut self, location: Option<&'a str>) -> Self {
        self.fallback_location = location;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self
            .dashboard
            .location
            .as_deref()
            .or(self.fallback_location)
            .unwrap_or("Unknown location");

        writeln!(f, "agriclimate: {}", location)?;
        writeln!(f)?;

        match &self.dashboard.current {
            Some(current) => write_current(f, current, self.crop_name)?,
            None => writeln!(f, "Current conditions: data not available")?,
        }

        writeln!(f)?;
        write_forecast(f, &self.dashboard.forecast)?;

        if let Some(advice) = self.dashboard.advice {
            writeln!(f)?;
            writeln!(f, "Farming advice: {}", advice)?;
        }

        Ok(())
    }
}

pub fn render(dashboard: &Dashboard, crop_name: &str, fallback_location: Option<&str>) -> String {
    Report::new(dashboard, crop_name)
        .fallback_location(fallback_location)
        .to_string()
}

fn write_current(f: &mut fmt::Formatter<'_>, current: &CurrentSection, crop_name: &str) -> fmt::Result {
    let d = &current.display;
    let s = &current.status;

    writeln!(f, "Weather")?;
    let gauges = [
        Gauge::new("Temperature", format!("{}°C", d.temperature), s.temperature)
            .range(40.0)
            .fill(d.temperature as f64),
        Gauge::new("Humidity", format!("{}%", d.humidity), s.humidity).fill(d.humidity as f64),
        Gauge::new("Rainfall", format!("{}mm", d.rainfall), s.rainfall)
            .range(10.0)
            .fill(d.rainfall),
        Gauge::new("Sunshine", format!("{:.1} hrs", d.sunshine), s.sunshine)
            .range(12.0)
            .fill(d.sunshine),
        Gauge::new("Wind", format!("{} km/h", d.wind_speed), s.wind)
            .range(30.0)
            .fill(d.wind_speed as f64),
        Gauge::new("Sky", format!("{}%", d.cloud_cover), s.sky).fill(100.0 - d.cloud_cover),
    ];
    for gauge in &gauges {
        writeln!(f, "{}", gauge.render())?;
    }

    let mut extras = Vec::new();
    if let Some(feels) = d.feels_like {
        extras.push(format!("feels like {}°C", feels));
    }
    if let Some(dew) = d.dew {
        extras.push(format!("dew point {:.1}°C", dew));
    }
    extras.push(format!("rain chance {}%", d.rain_chance));
    extras.push(format!("UV {}", d.uv_index));
    if let Some(dir) = d.wind_direction {
        extras.push(format!("wind from {:.0}°", dir));
    }
    if !d.conditions.is_empty() {
        extras.push(d.conditions.clone());
    }
    writeln!(f, "  {}", extras.join(", "))?;

    if current.sunshine.disagree() {
        if let Some(icon_hours) = current.sunshine.icon_hours {
            writeln!(
                f,
                "  note: condition-based sunshine estimate is {} hrs",
                icon_hours
            )?;
        }
    }

    let h = &current.crop_health;
    writeln!(f)?;
    writeln!(f, "{} health", crop_name)?;
    let scores = [
        ("Growth rate", h.growth_rate, h.growth_status()),
        ("Water level", h.water_level, h.water_status()),
        ("Pest risk", h.pest_risk, h.pest_status()),
        ("Disease risk", h.disease_risk, h.disease_status()),
    ];
    for (title, value, status) in scores {
        let gauge = Gauge::new(title, format!("{}%", value), status).fill(value as f64);
        writeln!(f, "{}", gauge.render())?;
    }
    writeln!(f, "  Growth stage: {}", h.growth_stage)?;
    for tip in GROWTH_STAGE_CARE {
        writeln!(f, "    • {}", tip)?;
    }
    Ok(())
}

fn write_forecast(f: &mut fmt::Formatter<'_>, rows: &[ForecastRow]) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "Forecast: data not available");
    }

    writeln!(f, "Forecast")?;
    for row in rows {
        let temps = match (row.high_temp, row.low_temp) {
            (Some(hi), Some(lo)) => format!("{}°C / {}°C", hi, lo),
            (Some(hi), None) => format!("{}°C", hi),
            (None, Some(lo)) => format!("{}°C", lo),
            (None, None) => "--".to_string(),
        };
        writeln!(
            f,
            "  {:<10} {:<7} {} {:<20} {:<16} rain {:>3}%  sun {:>2}h  {}",
            row.day_label,
            row.date_label,
            row.icon.symbol(),
            truncate(&row.condition, 20),
            temps,
            row.rain_chance,
            row.sunshine_hours,
            row.crop_impact
        )?;
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherPayload;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn gauge_bar_width() {
        let gauge = Gauge::new("Humidity", "50%", Status::Dry).fill(50.0);
        assert_eq!(gauge.bar().chars().count(), BAR_WIDTH);
        assert_eq!(gauge.bar().chars().filter(|c| *c == '█').count(), 10);

        let over = Gauge::new("Temperature", "60°C", Status::TooHot)
            .range(40.0)
            .fill(60.0);
        assert_eq!(over.bar(), "█".repeat(BAR_WIDTH));
    }

    #[test]
    fn truncate_long_conditions() {
        assert_eq!(truncate("Rain", 20), "Rain");
        assert_eq!(truncate("Rain, Partially cloudy", 10).chars().count(), 10);
    }

    #[test]
    fn report_without_data() {
        let dashboard = Dashboard::build(
            &WeatherPayload::default(),
            NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            15,
        );
        let text = render(&dashboard, "Rice", Some("Dhaka"));
        assert!(text.contains("Dhaka"));
        assert!(text.contains("Current conditions: data not available"));
        assert!(text.contains("Forecast: data not available"));
    }

    #[test]
    fn payload_address_wins_over_fallback() {
        let payload: WeatherPayload =
            serde_json::from_value(json!({ "resolvedAddress": "Sylhet, Bangladesh" })).unwrap();
        let dashboard =
            Dashboard::build(&payload, NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(), 15);
        let text = Report::new(&dashboard, "Rice")
            .fallback_location(Some("Dhaka"))
            .to_string();
        assert!(text.starts_with("agriclimate: Sylhet, Bangladesh\n"));
        assert!(!text.contains("Farming advice"));
    }

    #[test]
    fn report_with_data() {
        let payload: WeatherPayload = serde_json::from_value(json!({
            "address": "Dhaka",
            "currentConditions": {
                "temp": 28.0, "humidity": 75.0, "cloudcover": 20.0,
                "icon": "clear-day", "conditions": "Clear"
            },
            "days": [
                { "datetime": "2025-05-06", "tempmax": 33.0, "tempmin": 26.0,
                  "precipprob": 80.0, "icon": "rain", "conditions": "Rain" }
            ]
        }))
        .unwrap();
        let dashboard =
            Dashboard::build(&payload, NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(), 15);
        let text = render(&dashboard, "Rice", None);
        assert!(text.contains("Rice health"));
        assert!(text.contains("Growth rate"));
        assert!(text.contains("Manage water"));
        assert!(text.contains("condition-based sunshine estimate is 10 hrs"));
        assert!(text.contains("Prepare for rain"));
    }
}
