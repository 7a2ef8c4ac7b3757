pub mod decode;
pub mod functions;
pub mod global;
pub mod query;
pub mod types;

pub use decode::{CsvOptions, DecodeError, Parser};
pub use functions::{Args, Arity, FunctionError, FunctionRegistry, compute_suggestions};
pub use global::{call_function, function_names, register_function, with_registry};
pub use query::{Path, Segment, evaluate, filter_path};
pub use types::{Mapping, Scalar, Value};

/// Creates a `Vec<Value>` of helper arguments.
///
/// Each argument is converted via `Into<Value>`.
///
/// # Example
///
/// ```
/// use stencil::{FunctionRegistry, Value, values};
///
/// let registry = FunctionRegistry::with_builtins();
/// let result = registry.call("sub", &values![1, 3]).unwrap();
/// assert_eq!(result, Value::from(2));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$(::std::convert::Into::<$crate::Value>::into($value)),+]
    };
}
