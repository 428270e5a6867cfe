use std::collections::HashMap;
use std::env;
use std::fmt;

use thiserror::Error;

pub const DEFAULT_APP_NAME: &str = "AuthDemo";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const BIND_ADDRESS_VAR: &str = "BIND_ADDRESS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable: `{0}`")]
    MissingEnvVar(String),
    #[error("environment variable `{0}` is empty")]
    EmptyValue(String),
}

/// Shared secret used to sign tokens. Never printed.
#[derive(Clone)]
pub struct SigningKey(String);

impl<S: AsRef<str>> From<S> for SigningKey {
    fn from(secret: S) -> Self {
        SigningKey(secret.as_ref().to_string())
    }
}

impl SigningKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey: redacted")
    }
}

/// Token signing settings for one application.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub key: SigningKey,
    pub valid_issuer: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub jwt: JwtSettings,
}

/// Environment rendering of the `Jwt:<AppName>:Key` setting.
pub fn key_var(app_name: &str) -> String {
    format!("Jwt__{app_name}__Key")
}

/// Environment rendering of the `Jwt:<AppName>:ValidIssuer` setting.
pub fn valid_issuer_var(app_name: &str) -> String {
    format!("Jwt__{app_name}__ValidIssuer")
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env(app_name: &str) -> Result<Self, ConfigError> {
        Self::from_vars(app_name, &env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(app_name: &str, vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get(BIND_ADDRESS_VAR)
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Config {
            bind_address,
            jwt: JwtSettings::from_vars(app_name, vars)?,
        })
    }
}

impl JwtSettings {
    pub fn from_env(app_name: &str) -> Result<Self, ConfigError> {
        Self::from_vars(app_name, &env::vars().collect())
    }

    pub fn from_vars(app_name: &str, vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Ok(JwtSettings {
            key: SigningKey::from(required(vars, &key_var(app_name))?),
            valid_issuer: required(vars, &valid_issuer_var(app_name))?.to_owned(),
        })
    }
}

fn required<'a>(vars: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ConfigError> {
    let value = vars
        .get(name)
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;
    if value.is_empty() {
        return Err(ConfigError::EmptyValue(name.to_string()));
    }
    Ok(value)
}
