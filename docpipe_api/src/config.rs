//! Client configuration resolved from the deployment environment.

use std::str::FromStr;
use std::time::Duration;

/// Overrides the base address for every environment.
pub const BASE_URL_VAR: &str = "DOCPIPE_API_BASE_URL";
/// Selects the deployment environment: `development`, `test` or `production`.
pub const ENV_VAR: &str = "DOCPIPE_ENV";
/// Overrides the request timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "DOCPIPE_TIMEOUT_SECS";

/// Request timeout for interactive use.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Request timeout for deployments that run whole ingestion stages per call.
pub const LONG_RUNNING_TIMEOUT: Duration = Duration::from_secs(300);

/// Converts a timeout given in seconds. Zero would fail every request, so it
/// falls back to [`DEFAULT_TIMEOUT`].
pub fn timeout_from_secs(secs: u64) -> Duration {
    if secs == 0 {
        tracing::warn!("Ignoring zero request timeout, using {}s", DEFAULT_TIMEOUT.as_secs());
        return DEFAULT_TIMEOUT;
    }
    Duration::from_secs(secs)
}

/// Deployment environment, used to pick a default base address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Environment {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "http://localhost:8001",
            Environment::Production => "http://api.example.com",
        }
    }
}

/// Base address and timeout for one [`crate::Client`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Environment::default().default_base_url())
    }
}

impl ClientConfig {
    /// Config for `base_url` with [`DEFAULT_TIMEOUT`]. A trailing `/` is dropped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolves the config from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the config through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup(ENV_VAR) {
            Some(mode) => mode.parse::<Environment>().unwrap_or_else(|_| {
                tracing::warn!("Unknown {} '{}', using development", ENV_VAR, mode);
                Environment::Development
            }),
            None => Environment::Development,
        };

        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| env.default_base_url().to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => timeout_from_secs(secs),
                Err(e) => {
                    tracing::warn!("Ignoring invalid {} '{}': {}", TIMEOUT_VAR, raw, e);
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Self::new(&base_url).with_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_development() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn environment_selects_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_VAR, "production")]));
        assert_eq!(config.base_url, "http://api.example.com");
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_VAR, "production"),
            (BASE_URL_VAR, "http://rag.internal:9000/"),
        ]));
        assert_eq!(config.base_url, "http://rag.internal:9000");
    }

    #[test]
    fn blank_base_url_is_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "  ")]));
        assert_eq!(config.base_url, "http://localhost:8001");
    }

    #[test]
    fn unknown_environment_falls_back() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_VAR, "staging")]));
        assert_eq!(config.base_url, "http://localhost:8001");
    }

    #[test]
    fn timeout_override() {
        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "300")]));
        assert_eq!(config.timeout, LONG_RUNNING_TIMEOUT);

        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")]));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn zero_timeout_falls_back() {
        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")]));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        assert_eq!(timeout_from_secs(0), DEFAULT_TIMEOUT);
        assert_eq!(timeout_from_secs(5), Duration::from_secs(5));
    }
}
