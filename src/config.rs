//! Client configuration.

use crate::api::Endpoint;

/// How long the Copy control shows its confirmation, in milliseconds.
pub const DEFAULT_COPY_FEEDBACK_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path. Empty means same origin.
    pub api_base: String,
    pub copy_feedback_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), endpoint.path())
    }
}
