//! Template helper functions and their registry.
//!
//! Each family lives in its own module as plain Rust functions.
//! [`FunctionRegistry::with_builtins`] binds them to their template names.

pub mod args;
mod builtins;
pub mod collections;
pub mod date;
pub mod encode;
mod error;
mod layout;
pub mod numbers;
mod registry;
pub mod seq;
pub mod sql;
pub mod strings;
pub mod url;

pub use args::{Args, Number};
pub use error::{Arity, FunctionError, compute_suggestions};
pub use registry::{FunctionFn, FunctionRegistry};
