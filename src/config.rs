/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::SimError;

/***************************************/
/*             Constants               */
/***************************************/
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_FLOOR_TRAVEL_TIME: u32 = 10;
pub const DEFAULT_MIN_FLOOR: i32 = 1;
pub const DEFAULT_MAX_FLOOR: i32 = 100;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub elevator: ElevatorConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub floor_travel_time: u32,
    pub min_floor: i32,
    pub max_floor: i32,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            floor_travel_time: DEFAULT_FLOOR_TRAVEL_TIME,
            min_floor: DEFAULT_MIN_FLOOR,
            max_floor: DEFAULT_MAX_FLOOR,
        }
    }
}

impl ElevatorConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.floor_travel_time == 0 {
            return Err(SimError::Config(
                "floor_travel_time must be positive".to_string(),
            ));
        }
        if self.min_floor > self.max_floor {
            return Err(SimError::Config(format!(
                "min_floor ({}) is above max_floor ({})",
                self.min_floor, self.max_floor
            )));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Loads the configuration.
///
/// An explicit `path` must exist and parse. Without one, `config.toml` in the
/// working directory is used if present, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, SimError> {
    let config = match path {
        Some(path) => parse_config_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                parse_config_file(default_path)?
            } else {
                debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                Config::default()
            }
        }
    };

    config.elevator.validate()?;
    Ok(config)
}

pub fn parse_config_str(config_str: &str) -> Result<Config, SimError> {
    toml::from_str(config_str).map_err(|e| SimError::Config(e.to_string()))
}

/***************************************/
/*           Local functions           */
/***************************************/
fn parse_config_file(path: &Path) -> Result<Config, SimError> {
    info!("Loading configuration from {}", path.display());
    let config_str = fs::read_to_string(path)
        .map_err(|e| SimError::Config(format!("failed to read {}: {}", path.display(), e)))?;
    parse_config_str(&config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        // Purpose: Verify that every field is read from the TOML document

        // Arrange
        let config_str = "[elevator]\nfloor_travel_time = 7\nmin_floor = -2\nmax_floor = 40\n";

        // Act
        let config = parse_config_str(config_str).unwrap();

        // Assert
        assert_eq!(config.elevator.floor_travel_time, 7);
        assert_eq!(config.elevator.min_floor, -2);
        assert_eq!(config.elevator.max_floor, 40);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        // Purpose: Verify that omitted keys and sections fall back to the defaults

        let partial = parse_config_str("[elevator]\nfloor_travel_time = 3\n").unwrap();
        let empty = parse_config_str("").unwrap();

        assert_eq!(partial.elevator.floor_travel_time, 3);
        assert_eq!(partial.elevator.min_floor, DEFAULT_MIN_FLOOR);
        assert_eq!(partial.elevator.max_floor, DEFAULT_MAX_FLOOR);
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        // Purpose: Verify that a malformed document is reported as a config error

        let result = parse_config_str("[elevator\nfloor_travel_time = ");

        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        // Purpose: Verify that zero travel time and inverted bounds are rejected

        let zero_time = ElevatorConfig { floor_travel_time: 0, ..Default::default() };
        let inverted = ElevatorConfig { min_floor: 10, max_floor: 5, ..Default::default() };

        assert!(zero_time.validate().is_err());
        assert!(inverted.validate().is_err());
        assert!(ElevatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        // Purpose: Verify that an explicitly requested file must exist

        let result = load_config(Some(Path::new("does/not/exist.toml")));

        assert!(matches!(result, Err(SimError::Config(_))));
    }
}
