// crates/engine/src/lib.rs
pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod reader;
pub mod writer;

use crate::aggregate::LineTable;
use crate::config::Config;
use crate::error::Result;
use crate::normalize::Normalizer;
use log::debug;

/// Line counts observed during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines left after normalization
    pub retained: usize,
    /// Distinct normalized lines
    pub distinct: usize,
    /// Entries written after mode filtering
    pub emitted: usize,
}

/// Run the whole pipeline: read, normalize, count, filter, write.
///
/// Output is opened only after the input has been fully read, so a failing
/// input never creates or truncates the output file.
///
/// # Errors
///
/// Returns the first input or output error encountered.
pub fn run(config: &Config) -> Result<RunSummary> {
    debug!(
        "mode={:?} case_insensitive={} skip={:?} order={:?}",
        config.mode, config.case_insensitive, config.skip, config.order
    );
    debug!("input={:?} output={:?}", config.input, config.output);

    let mut normalizer = Normalizer::new(config.case_insensitive, config.skip);
    let lines = reader::read_input(config.input.as_deref(), &mut normalizer)?;
    let retained = lines.len();
    debug!(
        "retained {retained} lines, unused skip budget {:?}",
        normalizer.remaining()
    );

    let table = LineTable::from_lines(lines);
    let distinct = table.len();
    let table = filter::apply_mode(table, config.mode);
    debug!("{distinct} distinct lines, {} after filtering", table.len());

    writer::write_output(&table, config.output.as_deref(), config.write_options())?;

    Ok(RunSummary {
        retained,
        distinct,
        emitted: table.len(),
    })
}
