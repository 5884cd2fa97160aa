//! Small helpers shared by the engines and presentation rows

pub mod numeric;
pub mod text;

pub use numeric::{round_to, safe_divide};
pub use text::{normalize_value, value_is};
