//! Line normalization: case folding followed by field and character skipping.
//!
//! Skip budgets are shared by the whole input stream. A line that is shorter
//! than the remaining budget is consumed entirely and the rest of the budget
//! carries over to the next line.

use std::borrow::Cow;

/// Remaining number of fields and characters still to be discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipState {
    pub fields: usize,
    pub chars: usize,
}

impl SkipState {
    pub const fn new(fields: usize, chars: usize) -> Self {
        Self { fields, chars }
    }

    pub const fn is_exhausted(&self) -> bool {
        self.fields == 0 && self.chars == 0
    }
}

/// Normalize a single line against the current skip budgets.
///
/// Returns the normalized line together with the budgets to use for the next
/// line. An empty result means the line was consumed by the skip rules.
///
/// Characters are counted as Unicode scalar values, so `-s` never splits a
/// code point. Skipping fields rejoins the remaining ones with single spaces.
pub fn normalize(line: &str, case_insensitive: bool, skip: SkipState) -> (String, SkipState) {
    let mut skip = skip;
    let mut line: Cow<'_, str> = if case_insensitive {
        Cow::Owned(line.to_lowercase())
    } else {
        Cow::Borrowed(line)
    };

    if skip.fields > 0 {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if skip.fields > fields.len() {
            skip.fields -= fields.len();
            return (String::new(), skip);
        }
        let rest = fields[skip.fields..].join(" ");
        skip.fields = 0;
        line = Cow::Owned(rest);
    }

    if skip.chars > 0 {
        let len = line.chars().count();
        if skip.chars > len {
            skip.chars -= len;
            return (String::new(), skip);
        }
        let start = line
            .char_indices()
            .nth(skip.chars)
            .map_or(line.len(), |(idx, _)| idx);
        let rest = line[start..].to_owned();
        skip.chars = 0;
        line = Cow::Owned(rest);
    }

    (line.into_owned(), skip)
}

/// Stateful wrapper threading [`SkipState`] from one line to the next.
#[derive(Debug, Clone)]
pub struct Normalizer {
    case_insensitive: bool,
    skip: SkipState,
}

impl Normalizer {
    pub const fn new(case_insensitive: bool, skip: SkipState) -> Self {
        Self {
            case_insensitive,
            skip,
        }
    }

    /// Normalize the next line of the stream, or `None` if it is excluded.
    pub fn next_line(&mut self, line: &str) -> Option<String> {
        let (normalized, skip) = normalize(line, self.case_insensitive, self.skip);
        self.skip = skip;
        if normalized.is_empty() {
            log::trace!("dropped line {line:?}, remaining budget {skip:?}");
            None
        } else {
            Some(normalized)
        }
    }

    pub const fn remaining(&self) -> SkipState {
        self.skip
    }
}
