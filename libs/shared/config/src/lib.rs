use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_MAX_PAGE_SIZE: usize = 50;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_CANONICAL_URL: &str =
    "https://www.doctorfinder.com/specialties/general-physician-internal-medicine";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub simulated_latency_ms: u64,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub catalog_path: Option<String>,
    pub currency_symbol: String,
    pub canonical_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            catalog_path: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            canonical_url: DEFAULT_CANONICAL_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            port: parse_var("PORT", DEFAULT_PORT),
            simulated_latency_ms: parse_var("SIMULATED_LATENCY_MS", DEFAULT_SIMULATED_LATENCY_MS),
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            max_page_size: parse_var("MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE),
            catalog_path: env::var("CATALOG_PATH").ok().filter(|p| !p.trim().is_empty()),
            currency_symbol: env::var("CURRENCY_SYMBOL")
                .unwrap_or_else(|_| {
                    warn!("CURRENCY_SYMBOL not set, using default");
                    DEFAULT_CURRENCY_SYMBOL.to_string()
                }),
            canonical_url: env::var("CANONICAL_URL")
                .unwrap_or_else(|_| {
                    warn!("CANONICAL_URL not set, using default");
                    DEFAULT_CANONICAL_URL.to_string()
                }),
        };

        config.sanitized()
    }

    /// Page sizes must stay usable even when the environment says otherwise.
    pub fn sanitized(mut self) -> Self {
        if self.max_page_size == 0 {
            warn!("MAX_PAGE_SIZE must be positive, using {}", DEFAULT_MAX_PAGE_SIZE);
            self.max_page_size = DEFAULT_MAX_PAGE_SIZE;
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            let fallback = DEFAULT_PAGE_SIZE.min(self.max_page_size);
            warn!(
                "DEFAULT_PAGE_SIZE {} outside 1..={}, using {}",
                self.default_page_size, self.max_page_size, fallback
            );
            self.default_page_size = fallback;
        }
        self
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}
