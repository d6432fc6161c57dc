use spritelist_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stdout is reserved for output.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("spritelist error: {:#}", err);
        std::process::exit(1);
    }
}
