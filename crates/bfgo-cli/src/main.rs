use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = bfgo_cli::Cli::parse();
    bfgo_cli::init_logging(cli.verbose);

    match bfgo_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
