//! Sequential Investment Game Binary
//!
//! Reads a JSON configuration, runs the evolutionary stability sweep or the
//! payoff-function analysis it selects, and writes the report to the
//! configured file or to stdout.

use clap::Parser;
use sequential_investment::*;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "investment", about = "Monte Carlo analysis of the sequential investment game")]
struct Args {
    /// JSON configuration file
    #[arg(default_value = DEFAULT_CONFIG)]
    config: PathBuf,
    /// Master seed, overriding the configuration
    #[arg(long)]
    seed: Option<u64>,
    /// Worker threads, overriding the configuration
    #[arg(long)]
    workers: Option<usize>,
    /// Report file, overriding the configuration
    #[arg(long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let mut config = Config::load(&args.config)?;
    config.seed = args.seed.or(config.seed);
    config.workers = args.workers.or(config.workers);
    config.output_file_name = args.output.or(config.output_file_name);
    let sweep = Sweep::try_from(config)?;
    match sweep.config().output_file_name.clone() {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            sweep.run(BufWriter::new(file))?;
            log::info!("{:<32}{:<32}", "report written", path);
        }
        None => {
            sweep.run(std::io::stdout().lock())?;
        }
    }
    Ok(())
}
