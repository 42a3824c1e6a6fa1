//! Stake policies.
//!
//! A strategy maps the game context at one stage to the fraction of current
//! money the player stakes. The set of policies is closed: [`Strategy`] tags
//! each variant, and new policies are added as new variants.

mod constant;
mod context;
mod linear;
mod strategy;

pub use constant::*;
pub use context::*;
pub use linear::*;
pub use strategy::*;

use crate::*;

/// Capability shared by every stake policy.
///
/// Implementations are pure: parameters are fixed at construction and the
/// same context always yields the same fraction. The fraction is not bounded
/// by the trait; the simulator applies it to current money as is.
pub trait Stake: std::fmt::Display {
    /// Fraction of current money to put at risk this stage.
    fn fraction(&self, context: &Context) -> Probability;
    /// Stable textual label for reports.
    fn label(&self) -> String {
        self.to_string()
    }
}
