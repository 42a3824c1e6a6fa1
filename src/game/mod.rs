//! The stage game and its Monte Carlo simulator.
//!
//! A [`Game`] owns a roster of [`Player`]s and a set of [`Rules`]. Each
//! simulated round starts every player afresh from the starting money and
//! plays all stages; the final money of every player in every round is
//! collected into [`Rounds`].

mod game;
mod player;
mod rounds;
mod rules;

pub use game::*;
pub use player::*;
pub use rounds::*;
pub use rules::*;

use crate::*;
