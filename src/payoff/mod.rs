//! Symmetric payoff tables and pure Nash equilibrium search.

mod nash;
mod table;

pub use nash::*;
pub use table::*;

use crate::*;
