pub mod chapter_info;
pub mod source_info;

pub use chapter_info::ChapterInfo;
pub use source_info::SourceInfo;
