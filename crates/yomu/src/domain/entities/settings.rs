use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Fit {
    Width,
    Height,
    All,
}

impl Default for Fit {
    fn default() -> Self {
        Fit::All
    }
}

impl Fit {
    pub fn next(&self) -> Self {
        match self {
            Fit::Width => Fit::Height,
            Fit::Height => Fit::All,
            Fit::All => Fit::Width,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Direction {
    Vertical,
    LeftToRight,
    RightToLeft,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Vertical
    }
}

impl Direction {
    pub fn next(&self) -> Self {
        match self {
            Direction::Vertical => Direction::LeftToRight,
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::Vertical,
        }
    }
}

/// Reader display settings, persisted by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderSettings {
    pub fit: Fit,
    pub direction: Direction,
}

impl ReaderSettings {
    pub fn cycle_fit(&mut self) {
        self.fit = self.fit.next();
    }

    pub fn cycle_direction(&mut self) {
        self.direction = self.direction.next();
    }
}
