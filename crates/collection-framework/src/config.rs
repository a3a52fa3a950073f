//! Client configuration.
//!
//! Nothing is read from files or the environment; callers build a [`ClientConfig`]
//! (or deserialize one) and hand it to the gateways and collections they create.

use serde::{Deserialize, Serialize};

/// Base endpoint of the public placeholder API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Capacity of each collection's request channel.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Posts shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the REST API, without a trailing slash.
    pub base_url: String,
    /// Request channel capacity for every collection task.
    pub buffer_size: usize,
    /// Page size used by paginated views.
    pub page_size: usize,
    /// Overall HTTP timeout; `None` leaves the client default (no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
