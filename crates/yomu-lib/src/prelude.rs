pub use crate::error::Error;
pub use crate::models::{ChapterInfo, SourceInfo};
