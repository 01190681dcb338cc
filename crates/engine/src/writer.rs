use crate::aggregate::LineTable;
use crate::error::{EngineError, Result};
use crate::options::OutputOrder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// How entries are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub show_counts: bool,
    pub order: OutputOrder,
}

/// Write the table to `path`, or to stdout when no path is given.
///
/// The file is created (or truncated) only when this function is called.
///
/// # Errors
///
/// Returns [`EngineError::OutputCreate`] if the file cannot be created and
/// [`EngineError::OutputWrite`] on a write failure.
pub fn write_output(table: &LineTable, path: Option<&Path>, options: WriteOptions) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| EngineError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })?;
            write_table(&mut BufWriter::new(file), table, options)
        }
        None => {
            let stdout = io::stdout();
            write_table(&mut stdout.lock(), table, options)
        }
    }
}

/// Render one line per entry: `<line>` or `<line> - <count>`.
pub fn write_table<W: Write>(out: &mut W, table: &LineTable, options: WriteOptions) -> Result<()> {
    let write = |out: &mut W, line: &str, count: usize| {
        if options.show_counts {
            writeln!(out, "{line} - {count}")
        } else {
            writeln!(out, "{line}")
        }
    };

    let result = match options.order {
        OutputOrder::Unordered => table
            .iter()
            .try_for_each(|(line, count)| write(out, line, count)),
        OutputOrder::Sorted => table
            .sorted()
            .into_iter()
            .try_for_each(|(line, count)| write(out, line, count)),
    };

    result
        .and_then(|()| out.flush())
        .map_err(|source| EngineError::OutputWrite { source })
}
