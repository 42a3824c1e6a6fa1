//! Parameter sweeps: configuration, orchestration, and reports.
//!
//! A [`Config`] names ranges of stage counts, win probabilities, and
//! population sizes. [`Sweep`] runs the selected [`Mode`] for every
//! combination ([`Key`]) on a bounded worker pool and hands the results to
//! a [`Report`] once all of them are in.

mod config;
mod key;
mod layout;
mod mode;
mod report;
mod span;
mod sweep;

pub use config::*;
pub use key::*;
pub use layout::*;
pub use mode::*;
pub use report::*;
pub use span::*;
pub use sweep::*;

use crate::*;
