//! # Trimmed Mean
//!
//! This crate computes a trimmed arithmetic mean: the mean of a numeric
//! collection after discarding a proportion of the smallest and/or largest
//! values. One trim fraction trims both ends symmetrically, two fractions
//! trim the lower and upper ends separately.
//!
//! Inputs may mix integers and floats through the [`Number`] variant type,
//! or arrive loosely typed through [`Value`], in which case any non-numeric
//! element is rejected with a typed error. The computation is pure and
//! synchronous, allocates only local working state, and is safe to invoke
//! concurrently from independent call sites.

#[macro_use]
extern crate tracing;

mod fnc;

pub mod err;
pub mod val;

pub use err::Error;
pub use fnc::args::Trim;
pub use fnc::math::{trimmed_mean, trimmed_mean_of};
pub use val::{Number, Value};
