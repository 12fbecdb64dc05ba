use quill_core::SIGNING_SECRET_BYTES;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a duration: {value:?} (expected e.g. 45s, 30m, 2h)")]
    InvalidDuration { var: &'static str, value: String },
}

/// Token settings. The secret only has to outlive the process, because every
/// identity a token could name is forgotten on exit anyway.
#[derive(Clone)]
pub struct Config {
    secret: Vec<u8>,
    ttl: Duration,
    leeway: Duration,
}

impl Config {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: quill_core::ACCESS_TOKEN_DURATION,
            leeway: quill_core::ACCESS_TOKEN_LEEWAY,
        }
    }
    /// Fresh random signing secret for this process only.
    pub fn random() -> Self {
        use rand::Rng;
        let ref mut bytes = [0u8; SIGNING_SECRET_BYTES];
        rand::rng().fill(bytes);
        Self::new(bytes.to_vec())
    }
    /// Reads `JWT_SECRET`, `TOKEN_TTL` and `TOKEN_LEEWAY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET").ok();
        let ttl = std::env::var("TOKEN_TTL").ok();
        let leeway = std::env::var("TOKEN_LEEWAY").ok();
        Self::from_parts(secret.as_deref(), ttl.as_deref(), leeway.as_deref())
    }
    /// Assemble from optional raw settings; absent values take defaults.
    pub fn from_parts(
        secret: Option<&str>,
        ttl: Option<&str>,
        leeway: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let config = match secret.filter(|s| !s.is_empty()) {
            Some(secret) => Self::new(secret.as_bytes()),
            None => {
                log::warn!("[config] JWT_SECRET not set, signing with a per-process random secret");
                Self::random()
            }
        };
        let config = match ttl {
            Some(value) => config.with_ttl(parse("TOKEN_TTL", value)?),
            None => config,
        };
        let config = match leeway {
            Some(value) => config.with_leeway(parse("TOKEN_LEEWAY", value)?),
            None => config,
        };
        Ok(config)
    }
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
    pub fn leeway(&self) -> Duration {
        self.leeway
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::random()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .field("leeway", &self.leeway)
            .finish()
    }
}

fn parse(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    quill_core::duration(value).ok_or_else(|| ConfigError::InvalidDuration {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let config = Config::from_parts(Some("s3cret"), None, None).unwrap();
        assert_eq!(config.secret(), b"s3cret");
        assert_eq!(config.ttl(), Duration::from_secs(30 * 60));
        assert_eq!(config.leeway(), Duration::ZERO);
    }

    #[test]
    fn durations_parsed() {
        let config = Config::from_parts(Some("s3cret"), Some("5m"), Some("10s")).unwrap();
        assert_eq!(config.ttl(), Duration::from_secs(300));
        assert_eq!(config.leeway(), Duration::from_secs(10));
    }

    #[test]
    fn bad_duration_named() {
        let err = Config::from_parts(Some("s3cret"), Some("soon"), None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                var: "TOKEN_TTL",
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn oversized_duration_named() {
        let err = Config::from_parts(Some("s3cret"), Some("10000000000000000000s"), None)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                var: "TOKEN_TTL",
                value: "10000000000000000000s".to_string()
            }
        );
        let err = Config::from_parts(Some("s3cret"), None, Some("300000000000000d")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                var: "TOKEN_LEEWAY",
                value: "300000000000000d".to_string()
            }
        );
    }

    #[test]
    fn missing_secret_is_random() {
        let a = Config::from_parts(None, None, None).unwrap();
        let b = Config::from_parts(Some(""), None, None).unwrap();
        assert_eq!(a.secret().len(), SIGNING_SECRET_BYTES);
        assert_ne!(a.secret(), b.secret());
    }

    #[test]
    fn debug_redacts_secret() {
        let config = Config::new("s3cret");
        assert!(!format!("{:?}", config).contains("s3cret"));
    }
}
