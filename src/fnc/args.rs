use serde::{Deserialize, Serialize};

use crate::err::Error;

/// A validated trim configuration.
///
/// A trim fraction is the proportion of the sorted data discarded from one
/// end before averaging. Fractions must not be negative and must sum to
/// less than 1; a single fraction may exceed 0.5 on its own as long as the
/// sum rule holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trim {
	lower: f64,
	upper: f64,
}

impl Trim {
	/// Trim distinct fractions from the lower and upper ends.
	pub fn new(lower: f64, upper: f64) -> Result<Self, Error> {
		if lower < 0.0 || upper < 0.0 || lower + upper >= 1.0 {
			return Err(Error::InvalidTrimRange {
				lower,
				upper,
			});
		}
		Ok(Trim {
			lower,
			upper,
		})
	}

	/// Trim the same fraction from both ends.
	pub fn symmetric(fraction: f64) -> Result<Self, Error> {
		Self::new(fraction, fraction)
	}

	/// Build a trim from a positional fraction list: one element trims both
	/// ends symmetrically, two elements trim the lower and upper ends. Any
	/// other count is an arity error; there is no implicit zero-trim default.
	pub fn from_fractions(fractions: &[f64]) -> Result<Self, Error> {
		match *fractions {
			[fraction] => Self::symmetric(fraction),
			[lower, upper] => Self::new(lower, upper),
			_ => Err(Error::InvalidTrimArity {
				count: fractions.len(),
			}),
		}
	}

	pub fn lower(&self) -> f64 {
		self.lower
	}

	pub fn upper(&self) -> f64 {
		self.upper
	}
}
