use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::err::Error;
use crate::val::Number;

/// A loosely-typed input value.
///
/// Callers holding heterogeneous data hand a sequence of these to the
/// generic entry point. Only `Value::Number` coerces into a [`Number`];
/// every other variant fails with [`Error::NonNumericValue`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
	#[default]
	None,
	Bool(bool),
	Number(Number),
	Strand(String),
	Array(Vec<Value>),
	// Add new variants here
}

impl Value {
	pub fn is_number(&self) -> bool {
		matches!(self, Value::Number(_))
	}

	/// Coerce this value into a [`Number`], failing for non-numeric variants.
	pub fn coerce_to_number(&self) -> Result<Number, Error> {
		match self {
			Value::Number(v) => Ok(*v),
			value => Err(Error::NonNumericValue {
				value: value.clone(),
			}),
		}
	}
}

impl From<Number> for Value {
	fn from(v: Number) -> Self {
		Value::Number(v)
	}
}

macro_rules! from_number_prims {
	($($num: ty),*) => {
		$(
			impl From<$num> for Value {
				fn from(v: $num) -> Self {
					Value::Number(Number::from(v))
				}
			}
		)*
	};
}

from_number_prims!(i8, i16, i32, i64, isize, u8, u16, u32, usize, f32, f64);

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Strand(v.to_owned())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Strand(v)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Value::None => f.write_str("NONE"),
			Value::Bool(v) => Display::fmt(v, f),
			Value::Number(v) => Display::fmt(v, f),
			Value::Strand(v) => write!(f, "'{v}'"),
			Value::Array(v) => {
				f.write_str("[")?;
				for (i, value) in v.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
		}
	}
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn coerce_number() {
		assert!(Value::from(42).is_number());
		let res = Value::from(42).coerce_to_number();
		assert_eq!(res.unwrap(), Number::Int(42));
		let res = Value::from(1.25).coerce_to_number();
		assert_eq!(res.unwrap(), Number::Float(1.25));
	}

	#[test]
	fn coerce_non_numeric() {
		for value in [Value::None, Value::from(true), Value::from("abc"), Value::Array(vec![])] {
			let res = value.coerce_to_number();
			assert!(matches!(res, Err(Error::NonNumericValue { .. })));
		}
	}

	#[test]
	fn value_display() {
		assert_eq!("NONE", format!("{}", Value::None));
		assert_eq!("'abc'", format!("{}", Value::from("abc")));
		assert_eq!("[1, 2.5]", format!("{}", Value::Array(vec![1.into(), 2.5.into()])));
	}
}
