//! `dynjson` CLI — format, validate, and query JSON documents.
//!
//! The parser tolerates `//` and `/* */` comments, so this also works as a
//! "strip comments and normalize" filter for commented config files.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout, two-space indent)
//! echo '{"name":"Alice","age":30}' | dynjson fmt
//!
//! # Compact from file to file
//! dynjson fmt --compact -i data.json -o data.min.json
//!
//! # Look up a dotted path
//! dynjson get server.listen.port -i config.json
//!
//! # Validate only; prints line/column diagnostics on failure
//! dynjson check -i data.json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dynjson_core::{parse, path, serialize, serialize_indented};
use std::fs;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "dynjson", version, about = "Format, validate, and query JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and re-emit it formatted
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent string for pretty output
        #[arg(long, default_value = "  ", conflicts_with = "compact")]
        indent: String,
        /// Emit compact output with no whitespace
        #[arg(long)]
        compact: bool,
    },
    /// Look up a dotted path and print the matched value
    Get {
        /// Path into the document, e.g. `server.listen.port`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Path separator character
        #[arg(long, default_value_t = '.')]
        separator: char,
    },
    /// Parse only; exits nonzero with a line/column diagnostic on failure
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt {
            input,
            output,
            indent,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse(&text)?;
            let rendered = if compact {
                serialize(&value)
            } else {
                serialize_indented(&value, &indent)
            };
            write_output(output.as_deref(), &rendered)
        }
        Commands::Get {
            path: query,
            input,
            separator,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse(&text)?;
            match path::find_with(&value, &query, separator) {
                Some(found) => write_output(None, &serialize(found)),
                None => bail!("path not found: {query}"),
            }
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            parse(&text).context("invalid JSON")?;
            Ok(())
        }
    }
}

/// Read from the given file, or stdin when no file is given.
fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(file) => fs::read_to_string(file).with_context(|| format!("cannot read {file}")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

/// Write to the given file, or stdout when no file is given.
fn write_output(output: Option<&str>, text: &str) -> Result<()> {
    match output {
        Some(file) => {
            fs::write(file, text).with_context(|| format!("cannot write {file}"))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}
