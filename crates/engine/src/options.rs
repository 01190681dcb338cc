use crate::error::{EngineError, Result};

/// Output-shaping policy applied to the line count table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Every distinct line once, without counts
    #[default]
    Default,
    /// Every distinct line with its occurrence count
    Count,
    /// Only lines seen more than once
    DuplicatesOnly,
    /// Only lines seen exactly once
    UniquesOnly,
}

impl Mode {
    /// Resolve the mode from the three mutually exclusive CLI switches.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConflictingModes`] when more than one switch is set.
    pub fn from_flags(count: bool, duplicates: bool, uniques: bool) -> Result<Self> {
        match (count, duplicates, uniques) {
            (false, false, false) => Ok(Self::Default),
            (true, false, false) => Ok(Self::Count),
            (false, true, false) => Ok(Self::DuplicatesOnly),
            (false, false, true) => Ok(Self::UniquesOnly),
            _ => Err(EngineError::ConflictingModes),
        }
    }

    pub const fn shows_counts(self) -> bool {
        matches!(self, Self::Count)
    }
}

/// Order in which table entries are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputOrder {
    /// Hash table iteration order
    #[default]
    Unordered,
    /// Lexicographic by line
    Sorted,
}

impl From<bool> for OutputOrder {
    fn from(sorted: bool) -> Self {
        if sorted { Self::Sorted } else { Self::Unordered }
    }
}
