//! Application state.

use std::sync::Arc;

use ipca_core::{IpcaRepository, IpcaResult};

use crate::config::{CalculationLimits, ServerConfig};

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// IPCA history, immutable after startup.
    pub repository: Arc<IpcaRepository>,

    /// Year bounds for adjustment requests.
    pub limits: CalculationLimits,
}

impl AppState {
    /// Create state over an already loaded repository.
    pub fn new(repository: IpcaRepository, limits: CalculationLimits) -> Self {
        Self {
            repository: Arc::new(repository),
            limits,
        }
    }

    /// State over the bundled dataset with default limits.
    pub fn bundled() -> IpcaResult<Self> {
        Ok(Self::new(
            IpcaRepository::bundled()?,
            CalculationLimits::default(),
        ))
    }

    /// Build state from configuration, loading the configured dataset.
    pub fn from_config(config: &ServerConfig) -> IpcaResult<Self> {
        let repository = match &config.dataset_path {
            Some(path) => {
                tracing::info!("Loading IPCA dataset from {}", path);
                IpcaRepository::from_json_file(path)?
            }
            None => {
                tracing::info!("Using bundled IPCA dataset");
                IpcaRepository::bundled()?
            }
        };

        tracing::info!("Loaded {} IPCA records", repository.len());
        Ok(Self::new(repository, config.limits()))
    }
}
