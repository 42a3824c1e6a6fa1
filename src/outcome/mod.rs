//! Reduction of simulated money into win frequencies.
//!
//! Each round has exactly one winner: the player holding the most money,
//! with ties among the richest settled uniformly at random. Averaging the
//! win indicators over rounds gives each player's expected payoff.

mod payoff;
mod wins;

pub use payoff::*;
pub use wins::*;

use crate::*;
