use std::env;
use std::time::Duration;

/// Service configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub port: u16,
    /// Frankfurter-compatible API root, without trailing slash.
    pub api_base: String,
    pub timeout: Duration,
    pub from: String,
    pub to: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let str_or = |name: &str, default: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = lookup("PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(5000);
        let timeout_secs = lookup("FX_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(10);

        Self {
            bind: str_or("FX_BIND", "127.0.0.1"),
            port,
            api_base: str_or("FX_API_BASE", "https://api.frankfurter.app")
                .trim_end_matches('/')
                .to_string(),
            timeout: Duration::from_secs(timeout_secs),
            from: str_or("FX_FROM", "USD").to_uppercase(),
            to: str_or("FX_TO", "CNY").to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = config_from(&[]);
        assert_eq!(cfg.bind, "127.0.0.1");
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.api_base, "https://api.frankfurter.app");
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.from, "USD");
        assert_eq!(cfg.to, "CNY");
    }

    #[test]
    fn overrides_are_trimmed_and_normalised() {
        let cfg = config_from(&[
            ("PORT", " 8080 "),
            ("FX_API_BASE", "http://localhost:9000/"),
            ("FX_TIMEOUT_SECS", "3"),
            ("FX_TO", "eur"),
        ]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.api_base, "http://localhost:9000");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
        assert_eq!(cfg.to, "EUR");
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = config_from(&[
            ("PORT", "not-a-port"),
            ("FX_TIMEOUT_SECS", "0"),
            ("FX_BIND", "   "),
        ]);
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.bind, "127.0.0.1");
    }
}
