//! Server configuration.

use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON dataset to serve instead of the bundled series
    pub dataset_path: Option<String>,

    /// Earliest start year accepted by the adjustment endpoint
    #[serde(default = "default_min_year")]
    pub min_year: i32,

    /// Latest end year accepted by the adjustment endpoint
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_min_year() -> i32 {
    2015
}

fn default_max_year() -> i32 {
    2024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dataset_path: None,
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Year bounds for adjustment requests.
    pub fn limits(&self) -> CalculationLimits {
        CalculationLimits {
            min_year: self.min_year,
            max_year: self.max_year,
        }
    }
}

/// Inclusive year bounds for adjustment windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationLimits {
    /// Earliest accepted start year.
    pub min_year: i32,
    /// Latest accepted end year.
    pub max_year: i32,
}

impl Default for CalculationLimits {
    fn default() -> Self {
        ServerConfig::default().limits()
    }
}
