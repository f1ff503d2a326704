//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate parameters
//! from a YAML or JSON document.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateParameters;

/// Loads and provides access to rate parameters.
///
/// The document format is picked from the file extension: `.yaml` and `.yml`
/// are read as YAML, `.json` as JSON. Parameters are validated once at load
/// time and never change afterwards.
///
/// # Example
///
/// ```no_run
/// use uav_rating_engine::config::ConfigLoader;
/// use uav_rating_engine::models::WeightBand;
///
/// let loader = ConfigLoader::load("./config/rates.yaml")?;
/// let multiplier = loader.parameters().weight_adjustment(WeightBand::From5To10Kg)?;
/// println!("5 - 10kg multiplier: {}", multiplier);
/// # Ok::<(), uav_rating_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    parameters: RateParameters,
}

impl ConfigLoader {
    /// Loads rate parameters from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The extension is unsupported or the content does not parse (`ConfigParseError`)
    /// - The parsed parameters fail validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let parameters = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::parse_yaml(&path_str, &content)?,
            Some("json") => Self::parse_json(&path_str, &content)?,
            _ => {
                return Err(EngineError::ConfigParseError {
                    path: path_str,
                    message: "unsupported file extension, expected .yaml, .yml or .json"
                        .to_string(),
                });
            }
        };

        Self::from_parameters(parameters)
    }

    /// Wraps parameters that were built or loaded elsewhere, validating them.
    pub fn from_parameters(parameters: RateParameters) -> EngineResult<Self> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    fn parse_yaml(path: &str, content: &str) -> EngineResult<RateParameters> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn parse_json(path: &str, content: &str) -> EngineResult<RateParameters> {
        serde_json::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate parameters.
    pub fn parameters(&self) -> &RateParameters {
        &self.parameters
    }

    /// Consumes the loader, returning the rate parameters.
    pub fn into_parameters(self) -> RateParameters {
        self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeightBand;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/rates.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.parameters().hull_rate(), dec("0.6"));
        assert_eq!(loader.parameters().liability_rate(), dec("0.2"));
    }

    #[test]
    fn test_json_and_yaml_fixtures_agree() {
        let yaml = ConfigLoader::load(config_path()).unwrap();
        let json = ConfigLoader::load("./config/rates.json").unwrap();
        assert_eq!(yaml.parameters(), json.parameters());
    }

    #[test]
    fn test_all_weight_bands_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let params = loader.parameters();

        assert_eq!(params.weight_adjustment(WeightBand::UpTo5Kg).unwrap(), dec("1"));
        assert_eq!(
            params.weight_adjustment(WeightBand::From5To10Kg).unwrap(),
            dec("1.2")
        );
        assert_eq!(
            params.weight_adjustment(WeightBand::From10To20Kg).unwrap(),
            dec("1.6")
        );
        assert_eq!(params.weight_adjustment(WeightBand::Over20Kg).unwrap(), dec("2.5"));
    }

    #[test]
    fn test_curve_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let curve = loader.parameters().curve();

        assert_eq!(curve.base_limit, dec("1000000"));
        assert_eq!(curve.z, dec("0.2"));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/rates.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_extension_returns_parse_error() {
        let result = ConfigLoader::load("./Cargo.toml");

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("unsupported file extension"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_parameters_validates() {
        let mut params = ConfigLoader::load(config_path()).unwrap().into_parameters();
        params.ilf_riebesell_curve.base_limit = dec("-1");

        assert!(matches!(
            ConfigLoader::from_parameters(params),
            Err(EngineError::InvalidConfig { .. })
        ));
    }
}
