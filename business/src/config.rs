//! Client configuration.
//!
//! On the web the API is same-origin and permissions come from the hosting page, so
//! [`BusinessConfig::default`] is all that is needed. Native builds read overrides from
//! `USERADMIN_*` environment variables (optionally via a `.env` file loaded by the binary).

use std::env::vars;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::users::ViewerPermissions;

const NATIVE_API_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(String),
    #[error("{name} must be a boolean, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Prefix for every `/api/...` path. Empty means same-origin.
    pub api_base_url: String,
    pub permissions: ViewerPermissions,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                NATIVE_API_BASE_URL.to_owned()
            },
            permissions: ViewerPermissions::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    useradmin_api_base_url: Option<String>,
    useradmin_can_edit: Option<String>,
    useradmin_can_delete: Option<String>,
    useradmin_can_disable: Option<String>,
    useradmin_current_user_id: Option<u64>,
}

impl BusinessConfig {
    pub fn new(api_base_url: impl Into<String>, permissions: ViewerPermissions) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            permissions,
        }
    }

    /// Defaults overridden by `USERADMIN_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig =
            serde_env::from_iter(vars()).map_err(|err| ConfigError::Env(err.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            useradmin_api_base_url,
            useradmin_can_edit,
            useradmin_can_delete,
            useradmin_can_disable,
            useradmin_current_user_id,
        } = raw;

        let mut config = Self::default();
        if let Some(url) = useradmin_api_base_url {
            info!("Using USERADMIN_API_BASE_URL={url}");
            config.api_base_url = url;
        }

        config.permissions = ViewerPermissions {
            can_edit: parse_flag("USERADMIN_CAN_EDIT", useradmin_can_edit)?,
            can_delete: parse_flag("USERADMIN_CAN_DELETE", useradmin_can_delete)?,
            can_disable: parse_flag("USERADMIN_CAN_DISABLE", useradmin_can_disable)?,
            current_user_id: useradmin_current_user_id,
        };
        Ok(config)
    }
}

fn parse_flag(name: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
