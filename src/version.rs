// Version information for the Wiki2Vec Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-embedding-api-2026-08-30";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-30";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "entity-vectors",
    "word-vectors",
    "most-similar",
    "cosine-similarity",
    "health-check",
    "model-info",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Wiki2Vec Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
