use crate::error::{AgriClimateError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub crop: CropConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Shown when the payload carries no address
    pub location: Option<String>,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,
    /// Payload file used when no `--input` is given
    pub payload: Option<PathBuf>,
}

fn default_forecast_days() -> usize {
    15
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            location: None,
            forecast_days: default_forecast_days(),
            payload: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CropConfig {
    pub name: String,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            name: "Rice".into(),
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgriClimateError::Config(format!(
                "Config file not found at {:?}. Run `agriclimate init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriClimateError::Config(format!("Failed to read config: {}", e)))?;

        tracing::info!("Loaded config from {}", config_path.display());
        Self::from_yaml(&config_str)
    }

    /// Load the config if one exists, otherwise fall back to defaults.
    /// An explicit override path must exist.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_none() && !Self::exists(None) {
            tracing::debug!("No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(config_override)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AgriClimateError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dashboard.forecast_days == 0 {
            return Err(AgriClimateError::Config(
                "dashboard.forecast_days must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Number of forecast rows to render: the command-line value when given,
    /// otherwise the configured one. Zero is rejected either way.
    pub fn forecast_days(&self, cli_days: Option<usize>) -> Result<usize> {
        match cli_days {
            Some(0) => Err(AgriClimateError::Config(
                "--days must be at least 1".into(),
            )),
            Some(days) => Ok(days),
            None => {
                self.validate()?;
                Ok(self.dashboard.forecast_days)
            }
        }
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let default_path = Self::default_config_path()?;
        Ok(default_path)
    }

    pub fn exists(config_override: Option<&Path>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agriclimate/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriClimateError::Config("Cannot determine config directory".into()))?
            .join("agriclimate");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up agriclimate!");
        println!();

        let location: String = Input::new()
            .with_prompt("  Location name")
            .default("Dhaka".into())
            .interact_text()
            .map_err(|e| AgriClimateError::Config(format!("Input error: {}", e)))?;

        let forecast_days: usize = Input::new()
            .with_prompt("  Forecast days to show")
            .default(default_forecast_days())
            .validate_with(|days: &usize| -> std::result::Result<(), &'static str> {
                if *days == 0 {
                    Err("must be at least 1")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| AgriClimateError::Config(format!("Input error: {}", e)))?;

        let payload: String = Input::new()
            .with_prompt("  Default weather payload file (blank for none)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AgriClimateError::Config(format!("Input error: {}", e)))?;

        let config = Config {
            dashboard: DashboardConfig {
                location: Some(location).filter(|s| !s.is_empty()),
                forecast_days,
                payload: Some(payload)
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from),
            },
            crop: CropConfig::default(),
        };

        let config_path = Self::default_config_path()?;
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AgriClimateError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# agriclimate configuration\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AgriClimateError::Config(format!("Bad substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = Config::from_yaml(
            "dashboard:\n  location: Bogura\n  forecast_days: 7\n  payload: data/bogura.json\ncrop:\n  name: Jute\n",
        )
        .unwrap();
        assert_eq!(config.dashboard.location.as_deref(), Some("Bogura"));
        assert_eq!(config.dashboard.forecast_days, 7);
        assert_eq!(
            config.dashboard.payload,
            Some(PathBuf::from("data/bogura.json"))
        );
        assert_eq!(config.crop.name, "Jute");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = Config::from_yaml("dashboard:\n  location: Sylhet\n").unwrap();
        assert_eq!(config.dashboard.forecast_days, 15);
        assert_eq!(config.crop.name, "Rice");
    }

    #[test]
    fn zero_forecast_days_rejected() {
        let err = Config::from_yaml("dashboard:\n  forecast_days: 0\n").unwrap_err();
        assert!(matches!(err, AgriClimateError::Config(_)));
    }

    #[test]
    fn forecast_days_override() {
        let config = Config::default();
        assert_eq!(config.forecast_days(None).unwrap(), 15);
        assert_eq!(config.forecast_days(Some(3)).unwrap(), 3);

        let err = config.forecast_days(Some(0)).unwrap_err();
        assert!(matches!(err, AgriClimateError::Config(_)));
    }

    #[test]
    fn env_vars_substituted() {
        std::env::set_var("AGRICLIMATE_TEST_LOCATION", "Khulna");
        let config =
            Config::from_yaml("dashboard:\n  location: ${AGRICLIMATE_TEST_LOCATION}\n").unwrap();
        assert_eq!(config.dashboard.location.as_deref(), Some("Khulna"));
    }

    #[test]
    fn unset_env_var_left_as_is() {
        let out = Config::substitute_env_vars("a: ${AGRICLIMATE_SURELY_UNSET_VAR}").unwrap();
        assert_eq!(out, "a: ${AGRICLIMATE_SURELY_UNSET_VAR}");
    }

    #[test]
    fn missing_override_is_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/agriclimate.yaml"))).unwrap_err();
        assert!(matches!(err, AgriClimateError::Config(_)));
    }

    #[test]
    fn write_then_load() {
        let dir = std::env::temp_dir().join(format!("agriclimate-test-{}", std::process::id()));
        let path = dir.join("config.yaml");
        let config = Config {
            dashboard: DashboardConfig {
                location: Some("Rangpur".into()),
                forecast_days: 5,
                payload: None,
            },
            crop: CropConfig::default(),
        };
        config.write_to(&path).unwrap();
        assert_eq!(Config::load(Some(path)).unwrap(), config);
        let _ = std::fs::remove_dir_all(dir);
    }
}
