mod scalar;
mod value;

pub use scalar::Scalar;
pub use value::{Mapping, Value};
