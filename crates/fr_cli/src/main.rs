// crates/fr_cli/src/main.rs
//
// Wires up exit codes, typed error mapping, CLI parsing, and the single
// operation run. Results go to stdout, diagnostics to stderr.

mod args;
mod logging;

mod exitcodes {
    pub const OK: u8 = 0;
    pub const USAGE: u8 = 2;
    pub const INVALID_FRACTION: u8 = 3;
    pub const INCOMPATIBLE_DENOMINATOR: u8 = 4;
    pub const OVERFLOW: u8 = 5;
    pub const OUTPUT: u8 = 6;
}

use std::process::ExitCode;

use fr_core::{gcd, Fraction, FractionError};
use thiserror::Error;

use args::{parse_and_validate as parse_cli, ArgsError, Command, Format, Pair, Single};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug, Error)]
enum MainError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Fraction(#[from] FractionError),
    #[error("output error: {0}")]
    Output(String),
}

/// Result of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
enum Outcome {
    Fraction(Fraction),
    Gcd(u64),
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(ArgsError::Clap(e)) => {
            // clap formats help/version/usage errors itself.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(exitcodes::USAGE)
            } else {
                ExitCode::from(exitcodes::OK)
            };
        }
        Err(e) => {
            let e = MainError::from(e);
            eprintln!("fr: error: {e}");
            return ExitCode::from(map_error(&e));
        }
    };

    logging::init(args.quiet, args.verbose);

    let op = args.command.op_name();
    let result = execute(&args.command)
        .map_err(MainError::from)
        .and_then(|outcome| render(op, &outcome, args.format));
    let rc = match result {
        Ok(line) => {
            println!("{line}");
            exitcodes::OK
        }
        Err(e) => {
            tracing::debug!(op, error = ?e, "operation failed");
            eprintln!("fr: error: {e}");
            map_error(&e)
        }
    };

    ExitCode::from(rc)
}

/// Run the requested operation against fr_core.
fn execute(cmd: &Command) -> Result<Outcome, FractionError> {
    let outcome = match cmd {
        Command::New(s) => Outcome::Fraction(single(s)?),
        Command::Reduce(s) => Outcome::Fraction(single(s)?.reduce()?),
        Command::Gcd { a, b } => Outcome::Gcd(gcd(*a, *b)),
        Command::Add(p) => {
            let (l, r) = pair(p)?;
            Outcome::Fraction(l.add(&r)?)
        }
        Command::Sub(p) => {
            let (l, r) = pair(p)?;
            Outcome::Fraction(l.subtract(&r)?)
        }
        Command::Mul(p) => {
            let (l, r) = pair(p)?;
            Outcome::Fraction(l.multiply(&r)?)
        }
        Command::Div(p) => {
            let (l, r) = pair(p)?;
            Outcome::Fraction(l.divide(&r)?)
        }
    };
    tracing::debug!(op = cmd.op_name(), ?outcome, "computed");
    Ok(outcome)
}

fn single(s: &Single) -> Result<Fraction, FractionError> {
    Fraction::new(s.numerator, s.denominator)
}

fn pair(p: &Pair) -> Result<(Fraction, Fraction), FractionError> {
    let left = Fraction::new(p.n1, p.d1)?;
    let right = Fraction::new(p.n2, p.d2)?;
    tracing::trace!(%left, %right, "operands");
    Ok((left, right))
}

fn render(op: &str, outcome: &Outcome, format: Format) -> Result<String, MainError> {
    match format {
        Format::Text => Ok(match outcome {
            Outcome::Fraction(f) => f.to_string(),
            Outcome::Gcd(g) => g.to_string(),
        }),
        Format::Json => render_json(op, outcome),
    }
}

#[cfg(feature = "json")]
fn render_json(op: &str, outcome: &Outcome) -> Result<String, MainError> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        op: &'a str,
        result: &'a Outcome,
    }
    serde_json::to_string(&Report { op, result: outcome }).map_err(|e| MainError::Output(e.to_string()))
}

#[cfg(not(feature = "json"))]
fn render_json(_op: &str, _outcome: &Outcome) -> Result<String, MainError> {
    Err(MainError::Output("json output not compiled in".into()))
}

/// Map typed errors to the exit-code table.
fn map_error(e: &MainError) -> u8 {
    use exitcodes::*;
    match e {
        MainError::Args(_) => USAGE,
        MainError::Fraction(FractionError::InvalidFraction) => INVALID_FRACTION,
        MainError::Fraction(FractionError::IncompatibleDenominator { .. }) => INCOMPATIBLE_DENOMINATOR,
        MainError::Fraction(FractionError::Overflow) => OVERFLOW,
        MainError::Output(_) => OUTPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(n1: i64, d1: i64, n2: i64, d2: i64) -> Pair {
        Pair { n1, d1, n2, d2 }
    }

    fn fr(n: i64, d: i64) -> Outcome {
        Outcome::Fraction(Fraction::new(n, d).unwrap())
    }

    #[test]
    fn execute_each_operation() {
        let single = |numerator, denominator| Single { numerator, denominator };
        assert_eq!(execute(&Command::New(single(6, 8))).unwrap(), fr(6, 8));
        assert_eq!(execute(&Command::Reduce(single(6, 8))).unwrap(), fr(3, 4));
        assert_eq!(execute(&Command::Gcd { a: 12, b: 18 }).unwrap(), Outcome::Gcd(6));
        assert_eq!(execute(&Command::Add(pair(1, 4, 2, 4))).unwrap(), fr(3, 4));
        assert_eq!(execute(&Command::Sub(pair(3, 4, 1, 4))).unwrap(), fr(1, 2));
        assert_eq!(execute(&Command::Mul(pair(2, 3, 3, 4))).unwrap(), fr(1, 2));
        assert_eq!(execute(&Command::Div(pair(1, 2, 1, 3))).unwrap(), fr(3, 2));
    }

    #[test]
    fn execute_propagates_library_errors() {
        assert_eq!(
            execute(&Command::Add(pair(1, 4, 1, 3))),
            Err(FractionError::IncompatibleDenominator { left: 4, right: 3 })
        );
        assert_eq!(execute(&Command::Div(pair(1, 2, 0, 3))), Err(FractionError::InvalidFraction));
        assert_eq!(
            execute(&Command::Mul(pair(i64::MAX, 1, i64::MAX, 1))),
            Err(FractionError::Overflow)
        );
    }

    #[test]
    fn render_text() {
        assert_eq!(render("reduce", &fr(3, 4), Format::Text).unwrap(), "Fraction: [3/4]");
        assert_eq!(render("gcd", &Outcome::Gcd(6), Format::Text).unwrap(), "6");
    }

    #[cfg(feature = "json")]
    #[test]
    fn render_json_shapes() {
        assert_eq!(
            render("mul", &fr(1, 2), Format::Json).unwrap(),
            r#"{"op":"mul","result":{"numerator":1,"denominator":2}}"#
        );
        assert_eq!(render("gcd", &Outcome::Gcd(6), Format::Json).unwrap(), r#"{"op":"gcd","result":6}"#);
    }

    #[test]
    fn exit_codes_by_error_kind() {
        use exitcodes::*;
        assert_eq!(map_error(&MainError::Fraction(FractionError::InvalidFraction)), INVALID_FRACTION);
        assert_eq!(
            map_error(&MainError::Fraction(FractionError::IncompatibleDenominator { left: 1, right: 2 })),
            INCOMPATIBLE_DENOMINATOR
        );
        assert_eq!(map_error(&MainError::Fraction(FractionError::Overflow)), OVERFLOW);
        assert_eq!(map_error(&MainError::Output("x".into())), OUTPUT);
        assert_eq!(map_error(&MainError::Args(ArgsError::JsonDisabled)), USAGE);
    }
}
