//! Monte Carlo analysis of the sequential investment game.
//!
//! N agents each stake a strategy-determined fraction of their money over a
//! fixed number of stages; a biased coin doubles or zeroes every stake. This
//! crate estimates relative win frequencies by simulation and uses them to
//! build symmetric payoff tables, search for pure Nash equilibria, and test
//! strategies for evolutionary stability.
//!
//! # Module Structure
//!
//! - `strategy`: Stake policies (constant, time-linear)
//! - `game`: Rules, players, and the round simulator
//! - `outcome`: Win tables and win frequencies
//! - `profile`: Strategy profiles and canonical (multiset) enumeration
//! - `payoff`: Symmetric payoff table and Nash search
//! - `stability`: Evolutionary stability test
//! - `sweep`: Configuration, parameter sweeps, and reporting
mod fault;
mod game;
mod outcome;
mod payoff;
mod profile;
mod stability;
mod strategy;
mod sweep;

pub use fault::*;
pub use game::*;
pub use outcome::*;
pub use payoff::*;
pub use profile::*;
pub use stability::*;
pub use strategy::*;
pub use sweep::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Player wealth and stake amounts.
pub type Money = f32;
/// Coin bias, stake fractions, and win frequencies.
pub type Probability = f32;
/// Expected payoffs (win frequencies read back out of a payoff table).
pub type Utility = f32;
/// Index into the strategy set.
pub type Choice = usize;

// ============================================================================
// SIMULATION DEFAULTS
// ============================================================================
/// Configuration file read when none is given on the command line.
pub const DEFAULT_CONFIG: &str = "config.json";
/// Stage counter value at the start of every round.
pub const FIRST_STAGE: usize = 1;

// ============================================================================
// RANDOMNESS
// ============================================================================
/// Private random stream for one simulation task.
///
/// Derived from the run's master seed and the task's identity, so a task
/// draws the same numbers whichever worker runs it and in whatever order.
pub fn stream<T: std::hash::Hash>(seed: u64, task: T) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    use std::hash::DefaultHasher;
    use std::hash::Hash;
    use std::hash::Hasher;
    let ref mut hasher = DefaultHasher::default();
    seed.hash(hasher);
    task.hash(hasher);
    rand::rngs::SmallRng::seed_from_u64(hasher.finish())
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to stderr
/// (stdout is left to the report).
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
