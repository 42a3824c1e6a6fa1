//! Evolutionary stability of strategies against single mutants.
//!
//! A strategy `x` played by the whole population is evolutionarily stable
//! when no lone mutant `y` wins more than its fair share `1/P`, or, if the
//! mutant is within `epsilon` of neutral, when `x` in turn strictly beats
//! its fair share as the lone mutant among `y` players.

mod tester;
mod verdict;

pub use tester::*;
pub use verdict::*;

use crate::*;
