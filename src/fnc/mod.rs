pub mod args;
pub mod math;

pub(crate) mod util;
