//! Runtime configuration
//!
//! Defaults are embedded from `geopath_defaults.toml` and parsed once at
//! startup. A user file only needs the keys it wants to change.

use std::fs;
use std::str::FromStr;
use lazy_static::lazy_static;
use log::LevelFilter;
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Parse the embedded defaults on first use
    static ref DEFAULT_CONFIG: Config = {
        let content = include_str!("../geopath_defaults.toml");
        Config::parse_over(content, Config::default()).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
            Config::default()
        })
    };
}

/// Settings shared by the library facade and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Default simplification tolerance in meters
    pub tolerance_m: f64,
    /// Default radius for region queries in meters
    pub default_radius_m: f64,
    /// Largest span in degrees accepted for a query bounding box
    pub max_query_span_deg: f64,
    /// Log level threshold
    pub log_level: LevelFilter,
    /// Log file path; `None` logs to stderr only
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tolerance_m: 10.0,
            default_radius_m: 500.0,
            max_query_span_deg: 1.0,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    /// The built-in defaults
    pub fn defaults() -> Self {
        DEFAULT_CONFIG.clone()
    }

    /// Parse a configuration from a TOML string, falling back to defaults for missing keys
    pub fn from_str(content: &str) -> GeoResult<Self> {
        Self::parse_over(content, Self::defaults())
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(GeoError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    /// Overlay the keys present in `content` onto `base`
    fn parse_over(content: &str, base: Config) -> GeoResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = base;

        if let Some(v) = Self::get_number(&toml_value, "simplify", "tolerance_m")? {
            config.tolerance_m = v;
        }
        if let Some(v) = Self::get_number(&toml_value, "region", "default_radius_m")? {
            config.default_radius_m = v;
        }
        if let Some(v) = Self::get_number(&toml_value, "region", "max_query_span_deg")? {
            config.max_query_span_deg = v;
        }

        if let Some(level) = Self::get_string(&toml_value, "logging", "level")? {
            config.log_level = LevelFilter::from_str(level.trim())
                .map_err(|_| GeoError::ConfigError(format!("Unknown log level: '{}'", level)))?;
        }
        if let Some(file) = Self::get_string(&toml_value, "logging", "file")? {
            let file = file.trim();
            config.log_file = if file.is_empty() { None } else { Some(file.to_string()) };
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> GeoResult<()> {
        if !self.tolerance_m.is_finite() || self.tolerance_m < 0.0 {
            return Err(GeoError::ConfigError(format!(
                "simplify.tolerance_m must be finite and >= 0, got {}", self.tolerance_m)));
        }
        if !self.default_radius_m.is_finite() || self.default_radius_m < 0.0 {
            return Err(GeoError::ConfigError(format!(
                "region.default_radius_m must be finite and >= 0, got {}", self.default_radius_m)));
        }
        if !self.max_query_span_deg.is_finite() || self.max_query_span_deg <= 0.0 {
            return Err(GeoError::ConfigError(format!(
                "region.max_query_span_deg must be finite and > 0, got {}", self.max_query_span_deg)));
        }
        Ok(())
    }

    /// Read `[table].key` as a number, accepting integers and floats
    fn get_number(toml_value: &toml::Value, table: &str, key: &str) -> GeoResult<Option<f64>> {
        match toml_value.get(table).and_then(|t| t.get(key)) {
            None => Ok(None),
            Some(toml::Value::Float(f)) => Ok(Some(*f)),
            Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
            Some(other) => Err(GeoError::ConfigError(format!(
                "{}.{} must be a number, got {}", table, key, other.type_str()))),
        }
    }

    /// Read `[table].key` as a string
    fn get_string(toml_value: &toml::Value, table: &str, key: &str) -> GeoResult<Option<String>> {
        match toml_value.get(table).and_then(|t| t.get(key)) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(GeoError::ConfigError(format!(
                "{}.{} must be a string, got {}", table, key, other.type_str()))),
        }
    }
}
