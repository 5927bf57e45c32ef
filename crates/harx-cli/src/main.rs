use clap::Parser;
use harx_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as the flags allow; never fail the run over it.
    if let Err(err) = logging::init_logging(cli.verbose, cli.log_file.as_deref()) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("harx error: {:#}", err);
        std::process::exit(1);
    }
}
