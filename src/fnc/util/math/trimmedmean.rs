use crate::fnc::args::Trim;
use crate::fnc::util::math::mean::Mean;
use crate::val::number::Sorted;
use crate::val::Number;

pub trait Trimmedmean {
	/// Mean of the values remaining once the trimmed head and tail are
	/// dropped. The count dropped from each end is the collection length
	/// multiplied by that end's fraction, truncated towards zero.
	fn trimmedmean(&self, trim: Trim) -> f64;
}

impl Trimmedmean for Sorted<&Vec<Number>> {
	fn trimmedmean(&self, trim: Trim) -> f64 {
		let len = self.0.len();
		let lower = (len as f64 * trim.lower()) as usize;
		let upper = (len as f64 * trim.upper()) as usize;
		// The sum rule keeps lower + upper below len, so the bounds
		// cannot cross.
		let retained = &self.0[lower..len - upper];
		retained.mean()
	}
}
