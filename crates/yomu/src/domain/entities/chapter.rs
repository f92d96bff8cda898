use yomu_lib::models::{ChapterInfo, SourceInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub verified: bool,
}

impl From<SourceInfo> for Source {
    fn from(s: SourceInfo) -> Self {
        Self {
            name: s.name,
            verified: s.is_custom_source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub source_chapter_id: String,
    pub name: String,
    pub source: Source,
}

impl From<ChapterInfo> for Chapter {
    fn from(ch: ChapterInfo) -> Self {
        Self {
            source_chapter_id: ch.source_chapter_id,
            name: ch.name,
            source: ch.source.into(),
        }
    }
}
