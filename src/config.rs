//! Process configuration
//!
//! Everything the relay needs from the environment is read once, at startup,
//! into a [`RelayConfig`] that is then injected into the router and each
//! adapter. Nothing reads the environment at call time.

use std::net::SocketAddr;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::RelayError;

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BRAINMAN_BASE_URL: &str = "https://brainman.is-a-cool.dev";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Streaming-completions provider settings.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
        }
    }
}

/// Single-shot generation provider settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

/// Custom single-endpoint services; no credential.
#[derive(Debug, Clone)]
pub struct BrainmanConfig {
    pub base_url: String,
}

impl Default for BrainmanConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BRAINMAN_BASE_URL.to_string(),
        }
    }
}

/// Outbound HTTP behaviour shared by all adapters.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Overall deadline for one upstream request, body included.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: Some(concat!("chatrelay/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl HttpConfig {
    /// Build the shared `reqwest::Client` honouring the configured timeouts.
    pub fn build_client(&self) -> Result<reqwest::Client, RelayError> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout);
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        builder
            .build()
            .map_err(|e| RelayError::ConfigurationError(format!("failed to build HTTP client: {e}")))
    }
}

/// Complete relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub groq: GroqConfig,
    pub gemini: GeminiConfig,
    pub brainman: BrainmanConfig,
    pub http: HttpConfig,
    /// Base URL of the record store used by the account/history collaborators.
    pub backend_url: Option<String>,
    pub listen_addr: SocketAddr,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            groq: GroqConfig::default(),
            gemini: GeminiConfig::default(),
            brainman: BrainmanConfig::default(),
            http: HttpConfig::default(),
            backend_url: None,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl RelayConfig {
    /// Read configuration from the process environment.
    ///
    /// Supported environment variables:
    /// - `GROQ_API_KEY`, `GEMINI_API_KEY`: provider credentials
    /// - `GROQ_BASE_URL`, `GEMINI_BASE_URL`, `BRAINMAN_BASE_URL`: upstream bases
    /// - `BACKEND_URL`: record store base URL
    /// - `CHATRELAY_LISTEN_ADDR`: bind address
    /// - `CHATRELAY_REQUEST_TIMEOUT_SECS`, `CHATRELAY_CONNECT_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] but with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let groq = GroqConfig {
            api_key: get("GROQ_API_KEY").map(SecretString::from),
            base_url: get("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string()),
        };
        let gemini = GeminiConfig {
            api_key: get("GEMINI_API_KEY").map(SecretString::from),
            base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
        };
        let brainman = BrainmanConfig {
            base_url: get("BRAINMAN_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BRAINMAN_BASE_URL.to_string()),
        };

        let mut http = HttpConfig::default();
        if let Some(raw) = get("CHATRELAY_REQUEST_TIMEOUT_SECS") {
            http.timeout = Duration::from_secs(parse_secs("CHATRELAY_REQUEST_TIMEOUT_SECS", &raw)?);
        }
        if let Some(raw) = get("CHATRELAY_CONNECT_TIMEOUT_SECS") {
            http.connect_timeout =
                Duration::from_secs(parse_secs("CHATRELAY_CONNECT_TIMEOUT_SECS", &raw)?);
        }

        let listen_raw = get("CHATRELAY_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw.parse::<SocketAddr>().map_err(|e| {
            RelayError::ConfigurationError(format!(
                "Invalid CHATRELAY_LISTEN_ADDR '{listen_raw}': {e}"
            ))
        })?;

        Ok(Self {
            groq,
            gemini,
            brainman,
            http,
            backend_url: get("BACKEND_URL"),
            listen_addr,
        })
    }

    /// Names of credentials that are absent; logged as warnings at startup.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.groq.api_key.is_none() {
            missing.push("GROQ_API_KEY");
        }
        if self.gemini.api_key.is_none() {
            missing.push("GEMINI_API_KEY");
        }
        missing
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<u64, RelayError> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(RelayError::ConfigurationError(format!(
            "Invalid {key}: '{raw}' (expected a positive number of seconds)"
        ))),
        Ok(secs) => Ok(secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = RelayConfig::from_lookup(lookup(&[])).unwrap();
        assert!(cfg.groq.api_key.is_none());
        assert_eq!(cfg.groq.base_url, DEFAULT_GROQ_BASE_URL);
        assert_eq!(cfg.gemini.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(cfg.brainman.base_url, DEFAULT_BRAINMAN_BASE_URL);
        assert_eq!(cfg.http.timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
        assert_eq!(cfg.listen_addr.port(), 8080);
        assert_eq!(cfg.missing_credentials(), vec!["GROQ_API_KEY", "GEMINI_API_KEY"]);
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let cfg = RelayConfig::from_lookup(lookup(&[
            ("GROQ_API_KEY", " gsk-test "),
            ("GEMINI_API_KEY", "g-key"),
            ("BACKEND_URL", "http://127.0.0.1:8090"),
            ("CHATRELAY_LISTEN_ADDR", "127.0.0.1:3000"),
            ("CHATRELAY_REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.groq.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("gsk-test".to_string())
        );
        assert_eq!(cfg.backend_url.as_deref(), Some("http://127.0.0.1:8090"));
        assert_eq!(cfg.listen_addr.port(), 3000);
        assert_eq!(cfg.http.timeout, Duration::from_secs(30));
        assert!(cfg.missing_credentials().is_empty());
    }

    #[test]
    fn bad_numbers_are_configuration_errors() {
        let err = RelayConfig::from_lookup(lookup(&[("CHATRELAY_REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, RelayError::ConfigurationError(_)));

        let err = RelayConfig::from_lookup(lookup(&[("CHATRELAY_CONNECT_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(matches!(err, RelayError::ConfigurationError(_)));
    }

    #[test]
    fn bad_listen_addr_is_a_configuration_error() {
        let err =
            RelayConfig::from_lookup(lookup(&[("CHATRELAY_LISTEN_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, RelayError::ConfigurationError(_)));
    }

    #[test]
    fn debug_output_redacts_keys() {
        let cfg = RelayConfig::from_lookup(lookup(&[("GROQ_API_KEY", "gsk-very-secret")])).unwrap();
        assert!(!format!("{cfg:?}").contains("gsk-very-secret"));
    }
}
