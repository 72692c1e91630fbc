#![forbid(unsafe_code)]
//! A stack-based calculator over sparse multivariate polynomials with
//! signed 64-bit integer coefficients.
//!
//! The calculator reads a line-oriented textual protocol (see the
//! `polycalc` binary for the stdin/stdout driver): each line either pushes a
//! polynomial literal or invokes a named command against a stack of
//! polynomial values. This library exposes the reusable pieces — the
//! algebra [`kernel`], the literal [`parser`], the [`stack::Stack`]
//! container, and the [`interpreter::Calculator`] that ties them together —
//! independently of any particular I/O framing.
//!
//! # Example
//! ```
//! use polycalc::interpreter::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.execute("(1,2)+(2,3)").unwrap();
//! assert_eq!(calc.execute("DEG").unwrap(), Some("3".to_owned()));
//! assert_eq!(calc.execute("PRINT").unwrap(), Some("(1,2)+(2,3)".to_owned()));
//! ```

pub mod error;
pub mod interpreter;
pub mod kernel;
pub mod parser;
pub mod stack;

pub use error::CalcError;
pub use interpreter::Calculator;
pub use kernel::Polynomial;

/// The stdout and diagnostic output of running a complete multi-line
/// program through a fresh [`Calculator`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutcome {
    /// Stdout lines, in order, from commands that produced output.
    pub output: Vec<String>,
    /// Diagnostics, in order, formatted exactly as `ERROR <line> <reason>`.
    pub diagnostics: Vec<String>,
}

/// Run a complete line-oriented program through a fresh calculator and
/// collect its stdout/diagnostic lines, without touching any I/O stream.
///
/// This is a convenience wrapper around [`Calculator`] for callers that
/// want to drive the protocol over something other than process
/// stdin/stdout (a test harness, an embedding application); the
/// `polycalc` binary itself streams stdin line by line rather than
/// buffering it, but produces identical output for identical input.
///
/// # Example
/// ```
/// let outcome = polycalc::run("(1,2)+(2,3)\nDEG\nPRINT\nFOO\n");
/// assert_eq!(outcome.output, vec!["3".to_owned(), "(1,2)+(2,3)".to_owned()]);
/// assert_eq!(outcome.diagnostics, vec!["ERROR 4 WRONG COMMAND".to_owned()]);
/// ```
#[must_use]
pub fn run(program: &str) -> RunOutcome {
    let mut calc = Calculator::new();
    let mut outcome = RunOutcome::default();
    for (line_number, line) in program.lines().enumerate() {
        match calc.execute(line) {
            Ok(Some(text)) => outcome.output.push(text),
            Ok(None) => {}
            Err(err) => outcome
                .diagnostics
                .push(format!("ERROR {} {err}", line_number + 1)),
        }
        calc.shrink_stack();
    }
    outcome
}

#[cfg(test)]
mod tests;
