use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use yomu_lib::error::Error;

use crate::domain::entities::chapter::Chapter;

/// Chapters of a single source, in collection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup<'a> {
    pub name: &'a str,
    pub verified: bool,
    pub chapters: Vec<&'a Chapter>,
}

/// Checks the preconditions every other operation assumes: non-empty ids and
/// source names, one verified flag per source name, chapter ids unique within
/// their source.
pub fn validate(chapters: &[Chapter]) -> Result<(), Error> {
    let mut flags: HashMap<&str, bool> = HashMap::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for chapter in chapters {
        if chapter.source_chapter_id.is_empty() {
            return Err(Error::InvalidInput(format!(
                "chapter {:?} has no source chapter id",
                chapter.name
            )));
        }

        if chapter.source.name.is_empty() {
            return Err(Error::InvalidInput(format!(
                "chapter {:?} has no source name",
                chapter.name
            )));
        }

        if let Some(verified) = flags.insert(&chapter.source.name, chapter.source.verified) {
            if verified != chapter.source.verified {
                return Err(Error::InvalidInput(format!(
                    "source {:?} has divergent verified flags",
                    chapter.source.name
                )));
            }
        }

        if !seen.insert((&chapter.source.name, &chapter.source_chapter_id)) {
            return Err(Error::InvalidInput(format!(
                "duplicate chapter id {:?} in source {:?}",
                chapter.source_chapter_id, chapter.source.name
            )));
        }
    }

    Ok(())
}

/// Partitions chapters by source name. Groups appear in first-encountered
/// order, chapters keep their collection order within each group.
pub fn group_by_source(chapters: &[Chapter]) -> Vec<SourceGroup<'_>> {
    let mut groups: Vec<SourceGroup> = Vec::new();

    for chapter in chapters {
        match groups.iter_mut().find(|g| g.name == chapter.source.name) {
            Some(group) => group.chapters.push(chapter),
            None => groups.push(SourceGroup {
                name: &chapter.source.name,
                verified: chapter.source.verified,
                chapters: vec![chapter],
            }),
        }
    }

    groups
}

/// Groups the chapters of sources matching the verified flag, largest group
/// first. The sort is stable, so equal-size groups keep first-encountered
/// order.
pub fn rank_sources(chapters: &[Chapter], verified: bool) -> Vec<SourceGroup<'_>> {
    let mut groups: Vec<SourceGroup> = group_by_source(chapters)
        .into_iter()
        .filter(|group| group.verified == verified)
        .collect();

    groups.sort_by(|a, b| b.chapters.len().cmp(&a.chapters.len()));

    groups
}

/// All chapters of one source, collection order preserved. An unknown name
/// yields an empty list, not an error.
pub fn select_source_chapters<'a>(chapters: &'a [Chapter], source_name: &str) -> Vec<&'a Chapter> {
    chapters
        .iter()
        .filter(|chapter| chapter.source.name == source_name)
        .collect()
}

/// Case-sensitive substring match on chapter name, no normalization. An
/// empty query keeps every chapter.
pub fn filter_by_text<'a>(chapters: &[&'a Chapter], query: &str) -> Vec<&'a Chapter> {
    chapters
        .iter()
        .filter(|chapter| chapter.name.contains(query))
        .copied()
        .collect()
}

/// Relative navigation with boundary clamping: a target outside
/// `[0, len - 1]` is a no-op. Callers disable previous/next at the bounds
/// instead of wrapping.
pub fn navigate_by_offset<T>(items: &[T], current_index: usize, offset: isize) -> Option<&T> {
    let target = (current_index as isize).checked_add(offset)?;

    if target < 0 {
        return None;
    }

    items.get(target as usize)
}

/// Linear lookup by chapter id; a miss means "no selection change"
pub fn find_by_source_chapter_id<'a>(chapters: &[&'a Chapter], id: &str) -> Option<&'a Chapter> {
    chapters
        .iter()
        .find(|chapter| chapter.source_chapter_id == id)
        .copied()
}

/// Unique source names in first-encountered order
pub fn source_names(chapters: &[Chapter]) -> Vec<&str> {
    chapters
        .iter()
        .map(|chapter| chapter.source.name.as_str())
        .unique()
        .collect()
}

/// The current chapter's source, else the first chapter's source, else none
pub fn resolve_active_source<'a>(
    chapters: &'a [Chapter],
    current: Option<&'a Chapter>,
) -> Option<&'a str> {
    current
        .map(|chapter| chapter.source.name.as_str())
        .or_else(|| chapters.first().map(|chapter| chapter.source.name.as_str()))
}
