pub mod number;
pub mod value;

pub use self::number::Number;
pub use self::value::Value;
