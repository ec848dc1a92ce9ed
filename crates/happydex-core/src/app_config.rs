use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Seconds between collection cycles; each cycle polls one source.
    pub collection_interval_secs: u64,
    /// Minimum seconds between two WebSocket pushes.
    pub broadcast_interval_secs: u64,
    pub rolling_window: usize,
    pub recent_posts_cap: usize,
    pub time_series_cap: usize,
    pub region_history_cap: usize,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}
