//! Strategy profiles and their enumeration.
//!
//! A [`Profile`] assigns one strategy index to each population slot. In a
//! symmetric game, profiles that are permutations of one another have the
//! same payoffs up to that permutation, so only the sorted (canonical) form
//! of each multiset needs simulating. [`CanonicalIterator`] walks those in
//! lexicographic order; [`ExhaustiveIterator`] walks every profile.

mod canonical;
mod exhaustive;
mod profile;

pub use canonical::*;
pub use exhaustive::*;
pub use profile::*;

use crate::*;
