//! CLI command implementations.

mod call;
mod functions;
mod query;

pub use call::{run_call, CallArgs};
pub use functions::{run_functions, FunctionsArgs};
pub use query::{run_query, QueryArgs};
