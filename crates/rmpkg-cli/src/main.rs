use rmpkg_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; the console report works without it.
    if let Err(err) = logging::init_logging() {
        eprintln!("rmpkg: {:#}", err);
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("rmpkg error: {:#}", err);
        std::process::exit(1);
    }
}
