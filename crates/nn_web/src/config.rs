use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the news API. `None` leaves every fetch failing.
    pub api_base_url: Option<String>,
    pub bind: SocketAddr,
}
