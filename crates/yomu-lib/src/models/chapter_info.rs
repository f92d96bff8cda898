use serde::{Deserialize, Serialize};

use crate::models::SourceInfo;

/// A type represent a chapter as supplied by the fetch boundary
///
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterInfo {
    /// Unique within its source only, not globally
    pub source_chapter_id: String,
    pub name: String,
    pub source: SourceInfo,
}
