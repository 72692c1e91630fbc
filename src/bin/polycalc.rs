//! Standard-stream driver for the polynomial calculator: line framing,
//! line-number bookkeeping, diagnostic formatting, and the process exit-code
//! convention. This binary is a thin shell around [`polycalc::Calculator`] —
//! every algebraic decision is made inside the library; this module only
//! turns lines into calls and results into text.
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "printing the protocol's stdout/stderr output is this module's entire job"
)]

use std::io::{self, BufRead, Write};

use polycalc::Calculator;

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let mut calc = Calculator::new();

    for (line_number, line) in stdin.lock().lines().enumerate() {
        // A missing trailing newline on the final line of input is treated
        // as though it were present; `BufRead::lines` already yields that
        // final partial line as its own item, so no special-casing is needed
        // here to satisfy that requirement.
        let Ok(line) = line else {
            // A broken stdin stream (e.g. invalid UTF-8) is not a specified
            // diagnostic; there is nothing more useful to do than stop.
            break;
        };

        match calc.execute(&line) {
            Ok(Some(output)) => {
                writeln!(stdout, "{output}").expect("stdout write failed");
            }
            Ok(None) => {}
            Err(err) => {
                writeln!(stderr, "ERROR {} {err}", line_number + 1).expect("stderr write failed");
            }
        }

        calc.shrink_stack();
    }
}
