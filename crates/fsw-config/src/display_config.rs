use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Operator-banner display values. Never used for networking.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// LAN host shown in the mobile-access banner line. The launcher
    /// cannot discover this (it depends on the operator's network), so
    /// it is configuration; when unset the mobile line is omitted.
    pub mobile_host: Option<String>,
}

impl DisplayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref host) = self.mobile_host
            && (host.is_empty() || host.contains(['/', ' ']))
        {
            return Err(ConfigError::config(format!(
                "display.mobile_host must be a bare host or address, got {:?}",
                host
            )));
        }

        Ok(())
    }
}
