//! Configuration for shop service module

use serde::Deserialize;

/// Shop service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum length (in characters) of product, category and page names
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
        }
    }
}

fn default_max_name_length() -> usize {
    256
}
