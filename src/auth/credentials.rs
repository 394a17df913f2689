//! Credential management for Spikex API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Environment variable holding the access key.
pub const ACCESS_KEY_VAR: &str = "SPIKEX_ACCESS_KEY";
/// Environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "SPIKEX_SECRET_KEY";

/// API credentials containing the access key and secret key.
#[derive(Clone)]
pub struct Credentials {
    /// The access key, sent as `xt-validate-appkey`
    pub access_key: String,
    /// The secret key, used only for signing
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an access key and secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Both keys are present and non-empty.
    ///
    /// Signing with an empty secret is refused before any request is sent.
    pub fn is_complete(&self) -> bool {
        !self.access_key.is_empty() && !self.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(access_key, secret_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `SPIKEX_ACCESS_KEY` and `SPIKEX_SECRET_KEY`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if either variable is unset or empty.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(ACCESS_KEY_VAR, SECRET_KEY_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if either variable is unset or empty.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let access_key = std::env::var(key_var).ok().filter(|v| !v.is_empty())?;
        let secret_key = std::env::var(secret_var).ok().filter(|v| !v.is_empty())?;

        Some(Self {
            credentials: Credentials::new(access_key, secret_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
