//! Upload limits configuration.

use serde::{Deserialize, Serialize};

/// Upload limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted photo size in bytes. Oversized uploads are rejected,
    /// never truncated.
    #[serde(default = "default_max_size")]
    pub max_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size(),
        }
    }
}

fn default_max_size() -> u64 {
    50 * 1024 * 1024
}
