use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use vessel_core::QuantumCodes;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quantum_codes: QuantumCodes,
}

impl Settings {
    /// Loads settings from an optional yaml file and the
    /// `VESSEL_PROCESSORS` environment prefix.
    pub fn new() -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/processors").required(false))
            .add_source(Environment::with_prefix("VESSEL_PROCESSORS").separator("__"))
            .build()?
            .try_deserialize()
    }
}
