// crates/cli/src/config.rs
use crate::args::Args;
pub use uniq_lines_engine::config::{Config, ConfigBuilder};
use uniq_lines_engine::error::EngineError;
use uniq_lines_engine::normalize::SkipState;
use uniq_lines_engine::options::{Mode, OutputOrder};

impl TryFrom<Args> for Config {
    type Error = EngineError;

    /// Resolve the arguments into a run configuration. Conflicting mode
    /// switches are rejected here, before any file is touched.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mode = Mode::from_flags(args.count, args.duplicates, args.uniques)?;

        let config = ConfigBuilder::default()
            .input(args.input)
            .output(args.output)
            .mode(mode)
            .case_insensitive(args.ignore_case)
            .skip(SkipState::new(args.skip_fields, args.skip_chars))
            .order(OutputOrder::from(args.sorted))
            .build()?;
        Ok(config)
    }
}
