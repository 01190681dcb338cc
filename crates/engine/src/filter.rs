use crate::aggregate::LineTable;
use crate::options::Mode;

/// Narrow the table to the entries the mode emits.
pub fn apply_mode(mut table: LineTable, mode: Mode) -> LineTable {
    match mode {
        Mode::Default | Mode::Count => {}
        Mode::DuplicatesOnly => table.retain(|_, count| count != 1),
        Mode::UniquesOnly => table.retain(|_, count| count == 1),
    }
    table
}
