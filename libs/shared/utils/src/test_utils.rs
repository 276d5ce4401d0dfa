use std::sync::Arc;

use shared_config::AppConfig;

pub struct TestConfig {
    pub simulated_latency_ms: u64,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub catalog_path: Option<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            default_page_size: 5,
            max_page_size: 50,
            catalog_path: None,
        }
    }
}

impl TestConfig {
    pub fn with_page_size(mut self, default_page_size: usize) -> Self {
        self.default_page_size = default_page_size;
        self
    }

    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.simulated_latency_ms = latency_ms;
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            simulated_latency_ms: self.simulated_latency_ms,
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            catalog_path: self.catalog_path.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}
