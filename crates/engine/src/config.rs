use crate::error::EngineError;
use crate::normalize::SkipState;
use crate::options::{Mode, OutputOrder};
use crate::writer::WriteOptions;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Input file; `None` reads interactively from stdin
    #[builder(default)]
    pub input: Option<PathBuf>,
    /// Output file; `None` writes to stdout
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub mode: Mode,
    #[builder(default)]
    pub case_insensitive: bool,
    /// Initial skip budgets for the whole input stream
    #[builder(default)]
    pub skip: SkipState,
    #[builder(default)]
    pub order: OutputOrder,
}

impl Config {
    pub const fn write_options(&self) -> WriteOptions {
        WriteOptions {
            show_counts: self.mode.shows_counts(),
            order: self.order,
        }
    }
}

impl From<ConfigBuilderError> for EngineError {
    fn from(e: ConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}
