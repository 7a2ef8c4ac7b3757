//! Stencil CLI entry point.
//!
//! Provides command-line access to the document query and helper tools:
//! - `stencil query` - Decode a document and evaluate a path against it
//! - `stencil call` - Call a helper function with literal arguments
//! - `stencil functions` - List the registered helper functions

mod commands;
mod output;

use std::process::exit;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{run_call, run_functions, run_query, CallArgs, FunctionsArgs, QueryArgs};
use env_logger::{Builder, Env};
use log::debug;

/// Document query and template helper tools.
#[derive(Debug, Parser)]
#[command(name = "stencil")]
#[command(about = "Document query and template helper tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a document and evaluate a path query against it
    Query(QueryArgs),
    /// Call a helper function with literal arguments
    Call(CallArgs),
    /// List the registered helper functions
    Functions(FunctionsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Initialize logging. `RUST_LOG` takes precedence over `-v`.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    debug!("running {:?}", cli.command);
    let result = match cli.command {
        Commands::Query(args) => run_query(args),
        Commands::Call(args) => run_call(args),
        Commands::Functions(args) => run_functions(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
