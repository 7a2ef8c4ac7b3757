//! Implementation of the `stencil functions` command.

use miette::{miette, IntoDiagnostic};
use serde::Serialize;
use stencil::{compute_suggestions, function_names};

use crate::output::table::format_function_table;

/// Arguments for the functions command.
#[derive(Debug, clap::Args)]
pub struct FunctionsArgs {
    /// Only list names containing this text
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the function listing.
#[derive(Serialize)]
pub struct FunctionsResult {
    pub count: usize,
    pub functions: Vec<String>,
}

/// Run the functions command.
pub fn run_functions(args: FunctionsArgs) -> miette::Result<i32> {
    let all = function_names();
    let names: Vec<String> = match &args.filter {
        Some(filter) => {
            let needle = filter.to_lowercase();
            all.iter()
                .filter(|name| name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        None => all.clone(),
    };

    if names.is_empty() {
        let filter = args.filter.unwrap_or_default();
        let suggestions = compute_suggestions(&filter, &all);
        if suggestions.is_empty() {
            return Err(miette!("No functions match '{}'", filter));
        }
        return Err(miette!(
            "No functions match '{}', did you mean: {}?",
            filter,
            suggestions.join(", ")
        ));
    }

    if args.json {
        let output = FunctionsResult {
            count: names.len(),
            functions: names,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", format_function_table(&names));
    }
    Ok(exitcode::OK)
}
