//! `pixarc` entry point: parse the CLI (§6), initialise logging, run the
//! pipeline, and map the outcome onto the documented exit codes.

use clap::Parser;
use pixar_drv::{Cli, Session};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();
    let config = cli.into_config();

    init_logging(config.verbose);

    let session = Session::new(config);
    match session.run() {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("{}", err.diagnostic_line());
            std::process::exit(err.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}
