use thiserror::Error;

use crate::val::Value;

/// An error raised while computing a trimmed mean.
///
/// Every variant is a caller-input error: none are transient, and the
/// computation never retries internally.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The input collection has no elements
	#[error("The input collection contains no values")]
	EmptyInput,

	/// Neither one nor two trim fractions were supplied
	#[error("Expected 1 or 2 trim fractions, but found {count}")]
	InvalidTrimArity {
		count: usize,
	},

	/// A trim fraction is negative, or the fractions sum to 1 or more
	#[error(
		"Trim fractions must not be negative and must sum to less than 1, but found {lower} and {upper}"
	)]
	InvalidTrimRange {
		lower: f64,
		upper: f64,
	},

	/// An element of the input collection is not an integer or a float
	#[error("Expected a numeric value, but found {value}")]
	NonNumericValue {
		value: Value,
	},
}
