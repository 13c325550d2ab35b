//! Credential management for OKX API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "OKX_API_KEY";
/// Default environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "OKX_SECRET_KEY";
/// Default environment variable holding the passphrase.
pub const PASSPHRASE_VAR: &str = "OKX_PASSPHRASE";

/// API credentials: key, secret key and passphrase.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The secret key (private, used for signing)
    secret_key: SecretString,
    /// The passphrase chosen when the key was created
    passphrase: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key, secret key and passphrase.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
            passphrase: SecretString::from(passphrase.into()),
        }
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Get the passphrase for the `OK-ACCESS-PASSPHRASE` header.
    pub fn expose_passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }

    /// Whether the key, secret key and passphrase are all non-empty.
    pub fn completely_filled(&self) -> bool {
        !self.api_key.is_empty()
            && !self.expose_secret().is_empty()
            && !self.expose_passphrase().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
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
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, secret_key, passphrase),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
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
/// By default, reads `OKX_API_KEY`, `OKX_SECRET_KEY` and `OKX_PASSPHRASE`.
/// Unset variables become empty strings, so check
/// [`Credentials::completely_filled`] before issuing private calls.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Self {
        Self::from_env_vars(API_KEY_VAR, SECRET_KEY_VAR, PASSPHRASE_VAR)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str, passphrase_var: &str) -> Self {
        let read = |var: &str| std::env::var(var).unwrap_or_default();
        Self {
            credentials: Credentials::new(read(key_var), read(secret_var), read(passphrase_var)),
        }
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` unless all three variables are set and non-empty.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_VAR, SECRET_KEY_VAR, PASSPHRASE_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` unless all three variables are set and non-empty.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str, passphrase_var: &str) -> Option<Self> {
        let provider = Self::from_env_vars(key_var, secret_var, passphrase_var);
        provider.credentials.completely_filled().then_some(provider)
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret", "my_passphrase");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(!debug_str.contains("my_passphrase"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret", "pass");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
        assert_eq!(creds.expose_passphrase(), "pass");
    }

    #[test]
    fn test_completely_filled() {
        assert!(Credentials::new("key", "secret", "pass").completely_filled());
        assert!(!Credentials::new("", "secret", "pass").completely_filled());
        assert!(!Credentials::new("key", "", "pass").completely_filled());
        assert!(!Credentials::new("key", "secret", "").completely_filled());
    }

    #[test]
    fn test_env_credentials_missing_vars() {
        let provider = EnvCredentials::from_env_vars(
            "OKX_TEST_UNSET_KEY",
            "OKX_TEST_UNSET_SECRET",
            "OKX_TEST_UNSET_PASSPHRASE",
        );
        assert!(!provider.get_credentials().completely_filled());
        assert!(
            EnvCredentials::try_from_env_vars(
                "OKX_TEST_UNSET_KEY",
                "OKX_TEST_UNSET_SECRET",
                "OKX_TEST_UNSET_PASSPHRASE",
            )
            .is_none()
        );
    }
}
