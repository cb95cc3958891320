use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryLogConfig {
    /// Number of entries kept in memory; the oldest are evicted first.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for QueryLogConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    10_000
}
