//! Command-line entry point for the zip equivalence checks.

use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};
use tandem_zip_check::report::write_failure;
use tandem_zip_check::{run_all, CheckConfig};

/// Randomized equivalence checks for zipped sequences
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rows per generated column
    #[arg(short, long, default_value_t = 1000)]
    size: usize,

    /// Values are drawn from 1..=MODULUS
    #[arg(short, long, default_value_t = 25)]
    modulus: i32,

    /// Seed of the random generator
    #[arg(long, default_value_t = 5489)]
    seed: u64,

    /// Log each check as it runs (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> CheckConfig {
        CheckConfig::new()
            .with_size(self.size)
            .with_modulus(self.modulus)
            .with_seed(self.seed)
    }

    const fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logger; RUST_LOG still overrides the verbosity flag.
    env_logger::Builder::new()
        .filter_level(cli.level())
        .parse_default_env()
        .init();

    let config = cli.config();
    info!("checking {:?}", config);

    match run_all(&config) {
        Ok(()) => {
            println!("All tests OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Always reported, even with logging filtered off.
            let _ = write_failure(&mut std::io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}
