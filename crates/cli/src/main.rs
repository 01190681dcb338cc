use clap::Parser;
use std::process::ExitCode;
use uniq_lines_cli::args::Args;
use uniq_lines_cli::config::Config;
use uniq_lines_cli::error::Result;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let summary = uniq_lines_engine::run(&config)?;
    log::debug!("run finished: {summary:?}");
    Ok(())
}
