//! Implementation of the `stencil call` command.

use log::debug;
use miette::IntoDiagnostic;
use serde::Serialize;
use stencil::{call_function, FunctionError, Value};

/// Arguments for the call command.
#[derive(Debug, clap::Args)]
pub struct CallArgs {
    /// Helper function name (see `stencil functions`)
    pub function: String,

    /// Arguments; each is read as JSON when it parses, otherwise as text
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for call results.
#[derive(Serialize)]
pub struct CallResult<'a> {
    pub function: &'a str,
    pub result: &'a Value,
}

/// Read a command-line argument as a JSON literal, falling back to text.
fn parse_argument(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Value::from(json),
        Err(_) => Value::from(raw),
    }
}

/// Run the call command.
pub fn run_call(args: CallArgs) -> miette::Result<i32> {
    let values: Vec<Value> = args.args.iter().map(|raw| parse_argument(raw)).collect();
    debug!("calling '{}' with {} argument(s)", args.function, values.len());

    match call_function(&args.function, &values) {
        Ok(result) => {
            if args.json {
                let output = CallResult {
                    function: &args.function,
                    result: &result,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", result.render());
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Call error: {}", e);
            }
            match e {
                FunctionError::UnknownFunction { .. } | FunctionError::ArgumentCount { .. } => {
                    Ok(exitcode::USAGE)
                }
                _ => Ok(exitcode::DATAERR),
            }
        }
    }
}
