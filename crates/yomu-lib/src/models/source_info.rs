use serde::{Deserialize, Serialize};

/// A type represent an upstream chapter provider
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub name: String,
    /// Curated/trusted source flag
    pub is_custom_source: bool,
}
