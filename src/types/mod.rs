mod error;
mod types;

pub use error::TypeError;
pub use types::{Scalar, Type};
