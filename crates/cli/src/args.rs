// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "uniq_lines",
    version = crate::VERSION,
    about = "Report or omit repeated lines",
    long_about = "Reads lines from INPUT (or interactively from stdin until an empty line), \
                  optionally normalizes them, and writes each distinct line once to OUTPUT \
                  (or stdout). Output order is unspecified unless --sorted is given."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Prefix each distinct line with its number of occurrences (`<line> - <count>`)
    #[arg(short = 'c', help_heading = "Mode")]
    pub count: bool,

    /// Only print lines that occur more than once
    #[arg(short = 'd', help_heading = "Mode")]
    pub duplicates: bool,

    /// Only print lines that occur exactly once
    #[arg(short = 'u', help_heading = "Mode")]
    pub uniques: bool,

    /// Ignore case when comparing lines
    #[arg(short = 'i', help_heading = "Normalization")]
    pub ignore_case: bool,

    /// Skip the first N whitespace-separated fields of the input (budget spans lines)
    #[arg(short = 'f', value_name = "N", default_value_t = 0, help_heading = "Normalization")]
    pub skip_fields: usize,

    /// Skip the first N characters of the input after field skipping (budget spans lines)
    #[arg(short = 's', value_name = "N", default_value_t = 0, help_heading = "Normalization")]
    pub skip_chars: usize,

    /// Print lines in lexicographic order
    #[arg(long, help_heading = "Output")]
    pub sorted: bool,

    /// Input file (omit to type lines interactively)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file (omit for stdout)
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
