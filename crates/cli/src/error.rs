// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] uniq_lines_engine::error::EngineError),
}

impl AppError {
    /// Usage errors share clap's exit status; I/O failures exit with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(e) if e.is_config() => 2,
            Self::Engine(_) => 1,
        }
    }
}


pub type Result<T> = std::result::Result<T, AppError>;
