pub mod errors;
pub mod scalar;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use scalar::{Scalar, UNDETERMINED};
pub use types::{Card, Response};
