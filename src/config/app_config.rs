use std::fmt::Debug;

use serde::Deserialize;

use crate::domain::auth::{IssuerError, SigningConfig, ADMIN_ROLE};
use crate::infrastructure::auth::{
    StaticCredentialVerifier, DEFAULT_TRUSTED_PASSWORD, DEFAULT_TRUSTED_USERNAME,
};
use crate::infrastructure::observability::MetricsConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub jwt: JwtSettings,
    #[serde(default)]
    pub auth: TrustedIdentityConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Token signing settings (`jwt.key`, `jwt.issuer`, `jwt.audience`)
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct JwtSettings {
    /// Symmetric HS256 key, used as raw UTF-8 bytes
    pub key: String,
    pub issuer: String,
    pub audience: String,
}

impl Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("key", &"[hidden]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

/// The single identity accepted by the static verifier
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TrustedIdentityConfig {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Debug for TrustedIdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustedIdentityConfig")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("role", &self.role)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for TrustedIdentityConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_TRUSTED_USERNAME.to_string(),
            password: DEFAULT_TRUSTED_PASSWORD.to_string(),
            role: ADMIN_ROLE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment_source())
            .build()?;

        config.try_deserialize()
    }

    /// Build the validated signing configuration; fails fast on a weak or missing key
    pub fn signing_config(&self) -> Result<SigningConfig, IssuerError> {
        SigningConfig::validated(
            self.jwt.key.as_bytes(),
            self.jwt.issuer.as_str(),
            self.jwt.audience.as_str(),
        )
    }

    pub fn credential_verifier(&self) -> StaticCredentialVerifier {
        StaticCredentialVerifier::new(
            self.auth.username.as_str(),
            self.auth.password.as_str(),
            self.auth.role.as_str(),
        )
    }
}

/// `APP__SECTION__KEY` overrides. Values stay strings so numeric-looking keys
/// and passwords keep every digit; typed fields are parsed on deserialization.
fn environment_source() -> config::Environment {
    config::Environment::with_prefix("APP").separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::CredentialVerifier;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.auth.role, "Admin");
        assert!(config.jwt.key.is_empty());
    }

    #[test]
    fn test_missing_key_fails_fast() {
        let config = AppConfig::default();

        assert!(matches!(
            config.signing_config(),
            Err(IssuerError::InvalidSigningConfig { .. })
        ));
    }

    #[test]
    fn test_load_jwt_section() {
        let config = from_toml(
            r#"
            [jwt]
            key = "a-very-long-signing-key-of-32-bytes+"
            issuer = "login-api"
            audience = "login-clients"

            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        let signing = config.signing_config().unwrap();
        assert_eq!(signing.issuer(), "login-api");
        assert_eq!(signing.audience(), "login-clients");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_short_key_rejected_at_startup() {
        let config = from_toml(
            r#"
            [jwt]
            key = "too-short"
            issuer = "login-api"
            audience = "login-clients"
            "#,
        );

        let err = config.signing_config().unwrap_err();
        assert!(!err.to_string().contains("too-short"));
    }

    #[test]
    fn test_trusted_identity_override() {
        let config = from_toml(
            r#"
            [auth]
            username = "operator"
            password = "changeit"
            "#,
        );

        let verifier = config.credential_verifier();
        let identity = verifier.verify("operator", "changeit").unwrap();
        assert_eq!(identity.primary_role(), Some("Admin"));
        assert!(verifier.verify("admin", "123456").is_err());
    }

    fn from_env(vars: &[(&str, &str)]) -> AppConfig {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();

        config::Config::builder()
            .add_source(environment_source().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_all_digit_env_key_kept_verbatim() {
        let key = "1234567890123456789012345678901234567890";
        let config = from_env(&[
            ("APP__JWT__KEY", key),
            ("APP__JWT__ISSUER", "login-api"),
            ("APP__JWT__AUDIENCE", "login-clients"),
            ("APP__AUTH__PASSWORD", "000123"),
        ]);

        assert_eq!(config.jwt.key, key);
        assert_eq!(config.signing_config().unwrap().key(), key.as_bytes());
        assert_eq!(config.auth.password, "000123");
    }

    #[test]
    fn test_typed_env_values_still_parse() {
        let config = from_env(&[
            ("APP__SERVER__HOST", "127.0.0.1"),
            ("APP__SERVER__PORT", "9090"),
            ("APP__METRICS__ENABLED", "false"),
        ]);

        assert_eq!(config.server.port, 9090);
        assert!(!config.metrics.enabled);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let mut config = AppConfig::default();
        config.jwt.key = "super-secret-signing-key-value-0001".to_string();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-signing-key-value-0001"));
        assert!(!debug.contains("123456"));
    }
}
