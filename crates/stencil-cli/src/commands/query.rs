//! Implementation of the `stencil query` command.

use std::fs::read_to_string;
use std::io::{stdin, Read};
use std::path::PathBuf;

use log::info;
use miette::{miette, IntoDiagnostic, Report};
use serde::Serialize;
use stencil::{evaluate, Parser, Path, Value};

use crate::output::diagnostic::DecodeDiagnostic;

/// Arguments for the query command.
#[derive(Debug, clap::Args)]
pub struct QueryArgs {
    /// Dot-separated path to evaluate (e.g. `items.[].name`)
    #[arg(long, short = 'p', default_value = "")]
    pub path: String,

    /// Document format (json, xml or csv)
    #[arg(long, short = 'f', env = "STENCIL_FORMAT", default_value = "json")]
    pub format: String,

    /// Document to read; standard input when omitted
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for query results.
#[derive(Serialize)]
pub struct QueryResult<'a> {
    pub path: &'a str,
    pub result: &'a Value,
}

/// Run the query command.
pub fn run_query(args: QueryArgs) -> miette::Result<i32> {
    let (name, content) = match &args.file {
        Some(path) => {
            let content = read_to_string(path)
                .map_err(|e| miette!("Cannot read {}: {}", path.display(), e))?;
            (path.display().to_string(), content)
        }
        None => {
            let mut content = String::new();
            stdin().read_to_string(&mut content).into_diagnostic()?;
            ("<stdin>".to_string(), content)
        }
    };

    let parser = Parser::new();
    let document = match parser.parse_str(&content, &args.format) {
        Ok(document) => document,
        Err(e) => {
            match DecodeDiagnostic::from_decode_error(&name, &content, &e) {
                Some(diagnostic) => eprintln!("{:?}", Report::new(diagnostic)),
                None => eprintln!("Decode error: {}", e),
            }
            return Ok(exitcode::DATAERR);
        }
    };

    let path = Path::parse(&args.path);
    info!("evaluating {} segment(s) against {name}", path.segments().len());
    let result = evaluate(&path, &document);

    if args.json {
        let output = QueryResult {
            path: &args.path,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        print_value(&result).into_diagnostic()?;
    }
    Ok(exitcode::OK)
}

/// Print scalars as text and collections as pretty JSON. Absent prints nothing.
fn print_value(value: &Value) -> serde_json::Result<()> {
    match value {
        Value::Absent => {}
        Value::Scalar(_) => println!("{}", value.render()),
        Value::Sequence(_) | Value::Mapping(_) => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
    }
    Ok(())
}
