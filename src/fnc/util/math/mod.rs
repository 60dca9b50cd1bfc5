pub mod mean;
pub mod trimmedmean;

use crate::val::Number;

pub trait ToFloat {
	fn to_float(&self) -> f64;
}

impl ToFloat for Number {
	fn to_float(&self) -> f64 {
		self.to_float()
	}
}

impl ToFloat for f64 {
	fn to_float(&self) -> f64 {
		*self
	}
}

impl ToFloat for i64 {
	fn to_float(&self) -> f64 {
		*self as f64
	}
}
