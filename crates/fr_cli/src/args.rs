// crates/fr_cli/src/args.rs
//
// CLI argument surface. Operands are plain integers (numerator and
// denominator given separately); fraction literals such as "3/4" are not
// parsed. Negative operands are accepted on every subcommand.

use std::ffi::OsString;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "fr",
    version,
    disable_help_subcommand = true,
    about = "Fraction arithmetic: reduce, gcd, add, sub, mul, div"
)]
pub struct Args {
    /// Only log errors.
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). FR_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for results on stdout.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a fraction and print it as given.
    #[command(allow_negative_numbers = true)]
    New(Single),
    /// Reduce a fraction to lowest terms.
    #[command(allow_negative_numbers = true)]
    Reduce(Single),
    /// Greatest common divisor of two integers.
    #[command(allow_negative_numbers = true)]
    Gcd { a: i64, b: i64 },
    /// Add two fractions with equal denominators.
    #[command(allow_negative_numbers = true)]
    Add(Pair),
    /// Subtract two fractions with equal denominators.
    #[command(allow_negative_numbers = true)]
    Sub(Pair),
    /// Multiply two fractions.
    #[command(allow_negative_numbers = true)]
    Mul(Pair),
    /// Divide the first fraction by the second.
    #[command(allow_negative_numbers = true)]
    Div(Pair),
}

impl Command {
    /// Stable operation name used in logs and JSON output.
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::New(_) => "new",
            Command::Reduce(_) => "reduce",
            Command::Gcd { .. } => "gcd",
            Command::Add(_) => "add",
            Command::Sub(_) => "sub",
            Command::Mul(_) => "mul",
            Command::Div(_) => "div",
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct Single {
    pub numerator: i64,
    pub denominator: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Pair {
    pub n1: i64,
    pub d1: i64,
    pub n2: i64,
    pub d2: i64,
}

/// Errors surfaced by argument parsing/validation.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error("--format json is unavailable: built without the `json` feature")]
    JsonDisabled,
}

/// Parse process arguments and apply checks clap cannot express.
pub fn parse_and_validate() -> Result<Args, ArgsError> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(it: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(it)?;
    validate(&args)?;
    Ok(args)
}

fn validate(args: &Args) -> Result<(), ArgsError> {
    if args.format == Format::Json && !cfg!(feature = "json") {
        return Err(ArgsError::JsonDisabled);
    }
    Ok(())
}
