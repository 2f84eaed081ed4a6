// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use meetsel_core::{APP_NAME, Config as CoreConfig};

const MEETSEL_CONFIG_ENV: &str = "MEETSEL_CONFIG";
const MEETSEL_DEV_ENV: &str = "MEETSEL_DEV";

const MEETSEL_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const MEETSEL_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the picker configuration.
///
/// Lookup order: the `--config` path, then `MEETSEL_CONFIG`, then the user config directory.
/// An explicitly named file must exist; a missing file in the user config directory falls
/// back to the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(MEETSEL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            tracing::debug!("development mode, skipping default config discovery");
            return Ok(CoreConfig::default());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?
        .core;

    config.normalize()?;
    Ok(config)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    if let Ok(val) = std::env::var(MEETSEL_DEV_ENV) {
        let lower = val.to_lowercase();
        if MEETSEL_DEV_VALID_TRUE.contains(&lower.as_str()) {
            Some(true)
        } else if MEETSEL_DEV_VALID_FALSE.contains(&lower.as_str()) {
            Some(false)
        } else {
            tracing::warn!(
                "Unrecognized value for {}: '{}'. Expected one of: {}. Treating as unset.",
                MEETSEL_DEV_ENV,
                val,
                format!(
                    "true: {}, false: {}",
                    MEETSEL_DEV_VALID_TRUE.join(", "),
                    MEETSEL_DEV_VALID_FALSE.join(", ")
                )
            );
            None
        }
    } else {
        None
    }
}
