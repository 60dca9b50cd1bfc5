use crate::err::Error;
use crate::fnc::args::Trim;
use crate::fnc::util::math::trimmedmean::Trimmedmean;
use crate::val::number::Sort;
use crate::val::{Number, Value};

/// Computes the trimmed mean of a loosely-typed collection.
///
/// The checks run in a fixed order, so each failure reports its own error:
/// an empty collection first, then the fraction count, then the fraction
/// range, then any non-numeric element.
pub fn trimmed_mean(values: &[Value], fractions: &[f64]) -> Result<f64, Error> {
	if values.is_empty() {
		return Err(Error::EmptyInput);
	}
	let trim = Trim::from_fractions(fractions)?;
	let numbers = values.iter().map(Value::coerce_to_number).collect::<Result<Vec<_>, _>>()?;
	Ok(compute(numbers, trim))
}

/// Computes the trimmed mean of a numeric collection with a validated trim.
pub fn trimmed_mean_of(values: &[Number], trim: Trim) -> Result<f64, Error> {
	if values.is_empty() {
		return Err(Error::EmptyInput);
	}
	Ok(compute(values.to_vec(), trim))
}

fn compute(mut values: Vec<Number>, trim: Trim) -> f64 {
	trace!(
		len = values.len(),
		lower = trim.lower(),
		upper = trim.upper(),
		"computing trimmed mean"
	);
	values.sorted().trimmedmean(trim)
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn empty_input_is_checked_before_the_fractions() {
		// The empty-input error wins even when the fraction list is also
		// invalid.
		let res = trimmed_mean(&[], &[]);
		assert!(matches!(res, Err(Error::EmptyInput)));
		let res = trimmed_mean(&[], &[2.0, 2.0]);
		assert!(matches!(res, Err(Error::EmptyInput)));
	}

	#[test]
	fn fractions_are_checked_before_the_elements() {
		// The arity error wins even when an element is non-numeric.
		let res = trimmed_mean(&[Value::from("abc")], &[]);
		assert!(matches!(res, Err(Error::InvalidTrimArity { count: 0 })));
		let res = trimmed_mean(&[Value::from("abc")], &[0.7]);
		assert!(matches!(res, Err(Error::InvalidTrimRange { .. })));
	}

	#[test]
	fn non_numeric_element_is_rejected() {
		let values = vec![Value::from(1), Value::from("abc"), Value::from(3)];
		let res = trimmed_mean(&values, &[0.1]);
		assert!(matches!(res, Err(Error::NonNumericValue { .. })));
	}

	#[test]
	fn zero_trim_is_the_plain_mean() {
		let values = vec![Value::from(1), Value::from(2), Value::from(3), Value::from(6)];
		let out = trimmed_mean(&values, &[0.0, 0.0]).unwrap();
		assert_eq!(out, 3.0);
	}

	#[test]
	fn typed_entry_point() {
		let numbers: Vec<Number> = (1..=10).map(Number::Int).collect();
		let out = trimmed_mean_of(&numbers, Trim::symmetric(0.1).unwrap()).unwrap();
		assert_eq!(out, 5.5);
	}

	#[test]
	fn typed_entry_point_rejects_empty_input() {
		let res = trimmed_mean_of(&[], Trim::symmetric(0.1).unwrap());
		assert!(matches!(res, Err(Error::EmptyInput)));
	}
}
