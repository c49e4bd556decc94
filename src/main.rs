use clap::Parser;
use std::process::ExitCode;

use json2md::cli::{self, Args, CliConfig, CliUtils};

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        CliUtils::show_verbose("Verbose mode enabled", true);
    }

    let result = CliConfig::from_args(args).and_then(|config| cli::run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::handle_error(&e);
            ExitCode::from(1)
        }
    }
}
