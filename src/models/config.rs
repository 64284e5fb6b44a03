//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Page size used when a paged request does not specify one.
    pub default_page_size: i64,
    /// Largest page size a caller may request.
    pub max_page_size: i64,
}
