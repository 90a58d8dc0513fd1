use serde::{Deserialize, Serialize};

/// Limits applied while loading and querying. `None` means unbounded.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub max_results: Option<usize>,
    pub max_word_len: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub fn with_max_results(mut self, max_results: usize) -> SearchConfig {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_max_word_len(mut self, max_word_len: usize) -> SearchConfig {
        self.max_word_len = Some(max_word_len);
        self
    }
}
