use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for recipe extraction
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Title prefixes whose items never carry a recipe (tastings, bar tours)
    #[serde(default = "default_blocked_types")]
    pub blocked_types: Vec<String>,
    /// A paragraph's first line with more words than this is prose, not a title
    #[serde(default = "default_descriptive_word_threshold")]
    pub descriptive_word_threshold: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            blocked_types: default_blocked_types(),
            descriptive_word_threshold: default_descriptive_word_threshold(),
        }
    }
}

// Default value functions
fn default_blocked_types() -> Vec<String> {
    vec!["Home Bar".to_string(), "Tasting".to_string()]
}

fn default_descriptive_word_threshold() -> usize {
    10
}

impl ExtractConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with BARFLY__ prefix
    /// 2. barfly.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: BARFLY__BLOCKED_TYPES="Home Bar,Tasting,Review"
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ExtractConfig::load`] for the source priority.
pub fn load_config() -> Result<ExtractConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("barfly").required(false))
        .add_source(
            Environment::with_prefix("BARFLY")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("blocked_types")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
