use thiserror::Error;

/// Errors raised by the outer surfaces (CLI input/output and configuration).
///
/// Recipe extraction itself never fails; see [`SkipReason`] for why an item
/// produced no recipe.
#[derive(Error, Debug)]
pub enum BarflyError {
    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input was not a JSON array of items
    #[error("Invalid item JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Why an item was routed to the skipped partition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Title starts with a blocklisted category prefix
    #[error("title starts with blocked type \"{prefix}\"")]
    BlockedType { prefix: String },

    /// No paragraph contains a measurement line
    #[error("no recipe found")]
    NoRecipeFound,

    /// Every candidate paragraph formatted to nothing
    #[error("recipe was empty after formatting")]
    EmptyRecipe,
}
