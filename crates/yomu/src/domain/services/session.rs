use yomu_lib::error::Error;

use crate::domain::{entities::chapter::Chapter, services::navigator};

/// Reading-session state: the chapter collection, the active source, the
/// selected chapter and the filter text. Everything else is derived per call
/// through the navigator operations; the collection itself is never mutated.
pub struct ReadSession {
    chapters: Vec<Chapter>,
    active_source: Option<String>,
    current_chapter_id: Option<String>,
    filter: String,
}

impl ReadSession {
    /// Validates the collection and resolves the initial active source from
    /// the first chapter. No chapter is selected yet.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, Error> {
        navigator::validate(&chapters)?;

        let active_source =
            navigator::resolve_active_source(&chapters, None).map(str::to_string);

        Ok(Self {
            chapters,
            active_source,
            current_chapter_id: None,
            filter: String::new(),
        })
    }

    /// Resumes at a chapter of the collection, given by its position in the
    /// full collection. The active source follows that chapter's source.
    pub fn resume(chapters: Vec<Chapter>, current: usize) -> Result<Self, Error> {
        navigator::validate(&chapters)?;

        let chapter = chapters.get(current).ok_or_else(|| {
            Error::InvalidInput(format!("chapter index {current} out of range"))
        })?;

        let active_source = Some(chapter.source.name.clone());
        let current_chapter_id = Some(chapter.source_chapter_id.clone());

        Ok(Self {
            chapters,
            active_source,
            current_chapter_id,
            filter: String::new(),
        })
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn active_source(&self) -> Option<&str> {
        self.active_source.as_deref()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Chapters of the active source, collection order preserved
    pub fn source_chapters(&self) -> Vec<&Chapter> {
        match &self.active_source {
            Some(name) => navigator::select_source_chapters(&self.chapters, name),
            None => Vec::new(),
        }
    }

    /// Active-source chapters matching the filter text
    pub fn filtered_chapters(&self) -> Vec<&Chapter> {
        navigator::filter_by_text(&self.source_chapters(), &self.filter)
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        let id = self.current_chapter_id.as_deref()?;

        navigator::find_by_source_chapter_id(&self.source_chapters(), id)
    }

    /// Position of the selected chapter within the active source's chapters
    pub fn current_index(&self) -> Option<usize> {
        let id = self.current_chapter_id.as_deref()?;

        self.source_chapters()
            .iter()
            .position(|chapter| chapter.source_chapter_id == id)
    }

    /// Selects a chapter of the active source by id. A miss leaves the
    /// selection unchanged and returns false.
    pub fn set_chapter(&mut self, id: &str) -> bool {
        if navigator::find_by_source_chapter_id(&self.source_chapters(), id).is_none() {
            debug!("chapter {id} not in active source, selection unchanged");

            return false;
        }

        debug!("select chapter {id}");
        self.current_chapter_id = Some(id.to_string());

        true
    }

    /// Switches the active source. Names absent from the collection are
    /// rejected. The selected chapter survives the switch only if the new
    /// source carries the same chapter id, otherwise the selection clears.
    pub fn set_active_source(&mut self, name: &str) -> bool {
        if !navigator::source_names(&self.chapters).contains(&name) {
            debug!("source {name} not in collection, active source unchanged");

            return false;
        }

        debug!("switch active source to {name}");
        self.active_source = Some(name.to_string());

        if let Some(id) = self.current_chapter_id.clone() {
            if navigator::find_by_source_chapter_id(&self.source_chapters(), &id).is_none() {
                debug!("chapter {id} not in {name}, selection cleared");
                self.current_chapter_id = None;
            }
        }

        true
    }

    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
    }

    pub fn has_next(&self) -> bool {
        match self.current_index() {
            Some(index) => index + 1 < self.source_chapters().len(),
            None => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.current_index(), Some(index) if index > 0)
    }

    /// Clamped step forward; a no-op at the last chapter
    pub fn next_chapter(&mut self) -> Option<&Chapter> {
        self.navigate(1)
    }

    /// Clamped step backward; a no-op at the first chapter
    pub fn previous_chapter(&mut self) -> Option<&Chapter> {
        self.navigate(-1)
    }

    fn navigate(&mut self, offset: isize) -> Option<&Chapter> {
        let index = self.current_index()?;

        let id = {
            let source_chapters = self.source_chapters();
            let target = navigator::navigate_by_offset(&source_chapters, index, offset)?;

            target.source_chapter_id.clone()
        };

        trace!("navigate by {offset} to chapter {id}");
        self.current_chapter_id = Some(id);

        self.current_chapter()
    }
}
