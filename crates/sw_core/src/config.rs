use std::env;
use std::time::Duration;

pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0";

/// Declared descriptions only become the summary when their length falls
/// strictly inside this window.
pub const SUMMARY_MIN: usize = 140;
pub const SUMMARY_MAX: usize = 250;

const DEFAULT_ARTICLE_CACHE_TTL: u64 = 60 * 60 * 8;
const DEFAULT_FAILURE_CACHE_TTL: u64 = 60 * 10;
const DEFAULT_FETCH_TIMEOUT: u64 = 120;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub api_key: String,
    pub cache_prefix: String,
    pub article_cache_ttl: Duration,
    pub failure_cache_ttl: Duration,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "127.0.0.1"),
            port: env_parsed("PORT", 2023),
            environment: env_or("ENV", "dev"),
            api_key: env_or("API_KEY", "localdev"),
            cache_prefix: env_or("CACHE_PREFIX", "sportswire"),
            article_cache_ttl: Duration::from_secs(env_parsed(
                "ARTICLE_CACHE_TTL",
                DEFAULT_ARTICLE_CACHE_TTL,
            )),
            // Failures get their own, shorter TTL so one dropped connection
            // does not silence an endpoint for the full success TTL.
            failure_cache_ttl: Duration::from_secs(env_parsed(
                "ARTICLE_FAILURE_TTL",
                DEFAULT_FAILURE_CACHE_TTL,
            )),
            fetch_timeout: Duration::from_secs(env_parsed("FETCH_TIMEOUT", DEFAULT_FETCH_TIMEOUT)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
