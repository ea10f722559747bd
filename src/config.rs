use std::env;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_QUERY: &str = "Artificial Intelligence";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, read once at startup from the process environment
/// (optionally seeded from `.env.local`). Unset or invalid values fall back
/// to defaults rather than aborting.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub default_query: String,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: non_blank(env::var("NEWSDASH_BIND_ADDR").ok())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            default_query: non_blank(env::var("NEWSDASH_DEFAULT_QUERY").ok())
                .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            http_timeout: Duration::from_secs(parse_timeout_secs(
                env::var("NEWSDASH_HTTP_TIMEOUT_SECS").ok(),
            )),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn parse_timeout_secs(value: Option<String>) -> u64 {
    value
        .and_then(|text| text.trim().parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_original_dashboard() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.default_query, "Artificial Intelligence");
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn blank_values_fall_back() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(
            non_blank(Some("0.0.0.0:8080".to_string())),
            Some("0.0.0.0:8080".to_string())
        );
    }

    #[test]
    fn timeout_parsing_rejects_garbage_and_zero() {
        assert_eq!(parse_timeout_secs(Some("30".to_string())), 30);
        assert_eq!(parse_timeout_secs(Some("0".to_string())), 10);
        assert_eq!(parse_timeout_secs(Some("soon".to_string())), 10);
        assert_eq!(parse_timeout_secs(None), 10);
    }
}
