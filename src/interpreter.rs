//! Command dispatch: classifies a line as ignored, a command, or a
//! polynomial literal, and executes it against a [`Stack`].
//!
//! Dispatch order mirrors the reference implementation: exact-token
//! commands are checked first, then the three parameterized-prefix commands
//! (`DEG_BY`, `AT`, `COMPOSE`), falling through to `WRONG COMMAND`. Stack
//! mutation never begins until argument parsing and underflow checks have
//! both passed, so an error path always leaves the stack exactly as it was.

use crate::error::CalcError;
use crate::kernel::{self, Polynomial};
use crate::parser;
use crate::stack::Stack;

/// Bundles the evaluation stack with the one-line-at-a-time interpreter.
#[derive(Debug, Default)]
pub struct Calculator {
    stack: Stack,
}

impl Calculator {
    /// Create a calculator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Calculator {
            stack: Stack::new(),
        }
    }

    /// Process one already-trimmed input line (no trailing newline).
    ///
    /// Returns `Ok(Some(text))` when the command produces stdout output,
    /// `Ok(None)` when it succeeds silently, and `Err(_)` for any of the
    /// protocol's non-fatal diagnostics. Ignored lines (empty, or starting
    /// with `#`) always return `Ok(None)`.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, CalcError> {
        if is_ignored(line) {
            return Ok(None);
        }
        if starts_with_ascii_letter(line) {
            execute_command(line, &mut self.stack)
        } else if parser::validate(line) {
            self.stack.push(parser::load(line));
            Ok(None)
        } else {
            Err(CalcError::WrongPoly)
        }
    }

    /// Apply the stack's shrink policy. Call once per processed input line,
    /// matching the reference driver's cadence.
    pub fn shrink_stack(&mut self) {
        self.stack.maybe_shrink();
    }

    /// The number of polynomials currently on the stack (test/inspection use).
    #[must_use]
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }
}

fn is_ignored(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

fn starts_with_ascii_letter(line: &str) -> bool {
    line.as_bytes().first().is_some_and(u8::is_ascii_alphabetic)
}

fn execute_command(line: &str, stack: &mut Stack) -> Result<Option<String>, CalcError> {
    match line {
        "ZERO" => {
            stack.push(Polynomial::Constant(0));
            Ok(None)
        }
        "IS_COEFF" => {
            let top = stack.peek_at(0).ok_or(CalcError::StackUnderflow)?;
            Ok(Some(bool_text(top.is_constant())))
        }
        "IS_ZERO" => {
            let top = stack.peek_at(0).ok_or(CalcError::StackUnderflow)?;
            Ok(Some(bool_text(top.is_zero())))
        }
        "CLONE" => {
            let top = stack.peek_at(0).ok_or(CalcError::StackUnderflow)?.clone();
            stack.push(top);
            Ok(None)
        }
        "ADD" => binary(stack, kernel::add),
        "MUL" => binary(stack, kernel::mul),
        "NEG" => unary(stack, kernel::neg),
        "SUB" => binary(stack, kernel::sub),
        "IS_EQ" => {
            if stack.len() < 2 {
                return Err(CalcError::StackUnderflow);
            }
            let top = stack.peek_at(0).ok_or(CalcError::StackUnderflow)?;
            let second = stack.peek_at(1).ok_or(CalcError::StackUnderflow)?;
            Ok(Some(bool_text(top == second)))
        }
        "DEG" => {
            let top = stack.peek_at(0).ok_or(CalcError::StackUnderflow)?;
            Ok(Some(kernel::degree(top).to_string()))
        }
        "PRINT" => {
            let top = stack.peek_at(0).ok_or(CalcError::StackUnderflow)?;
            Ok(Some(top.to_string()))
        }
        "POP" => {
            stack.pop().ok_or(CalcError::StackUnderflow)?;
            Ok(None)
        }
        _ => execute_prefixed_command(line, stack),
    }
}

fn execute_prefixed_command(line: &str, stack: &mut Stack) -> Result<Option<String>, CalcError> {
    if line.starts_with("DEG_BY") {
        deg_by(line, stack)
    } else if line.starts_with("AT") {
        at(line, stack)
    } else if line.starts_with("COMPOSE") {
        compose(line, stack)
    } else {
        Err(CalcError::WrongCommand)
    }
}

fn unary(
    stack: &mut Stack,
    f: impl FnOnce(&Polynomial) -> Polynomial,
) -> Result<Option<String>, CalcError> {
    let p = stack.pop().ok_or(CalcError::StackUnderflow)?;
    stack.push(f(&p));
    Ok(None)
}

fn binary(
    stack: &mut Stack,
    f: impl FnOnce(&Polynomial, &Polynomial) -> Polynomial,
) -> Result<Option<String>, CalcError> {
    if stack.len() < 2 {
        return Err(CalcError::StackUnderflow);
    }
    let p1 = stack.pop().ok_or(CalcError::StackUnderflow)?;
    let p2 = stack.pop().ok_or(CalcError::StackUnderflow)?;
    stack.push(f(&p1, &p2));
    Ok(None)
}

fn bool_text(b: bool) -> String {
    if b { "1".to_owned() } else { "0".to_owned() }
}

/// Split a line into its argument substring, following the one-space
/// separator rule. `None` means the separator was malformed (`WRONG
/// COMMAND`); a bare token, or a token followed by nothing but the
/// separator, yields `Some("")`, which argument parsing then rejects as an
/// absent argument.
fn split_argument<'a>(line: &'a str, token: &str) -> Option<&'a str> {
    if line.len() == token.len() {
        return Some("");
    }
    let rest = &line[token.len()..];
    rest.strip_prefix(' ')
}

fn deg_by(line: &str, stack: &mut Stack) -> Result<Option<String>, CalcError> {
    let arg = split_argument(line, "DEG_BY").ok_or(CalcError::WrongCommand)?;
    let idx = parse_unsigned(arg).ok_or(CalcError::DegByWrongVariable)?;
    let top = stack.peek_at(0).ok_or(CalcError::StackUnderflow)?;
    Ok(Some(kernel::degree_by(top, idx).to_string()))
}

fn at(line: &str, stack: &mut Stack) -> Result<Option<String>, CalcError> {
    let arg = split_argument(line, "AT").ok_or(CalcError::WrongCommand)?;
    let x = parse_signed(arg).ok_or(CalcError::AtWrongValue)?;
    let p = stack.pop().ok_or(CalcError::StackUnderflow)?;
    stack.push(kernel::at(&p, x));
    Ok(None)
}

fn compose(line: &str, stack: &mut Stack) -> Result<Option<String>, CalcError> {
    let arg = split_argument(line, "COMPOSE").ok_or(CalcError::WrongCommand)?;
    let k = parse_unsigned(arg).ok_or(CalcError::ComposeWrongParameter)?;
    let k_usize = usize::try_from(k).map_err(|_| CalcError::ComposeWrongParameter)?;
    let needed = k_usize.checked_add(1).ok_or(CalcError::StackUnderflow)?;
    if stack.len() < needed {
        return Err(CalcError::StackUnderflow);
    }
    let p = stack.pop().ok_or(CalcError::StackUnderflow)?;
    let mut popped = Vec::with_capacity(k_usize);
    for _ in 0..k_usize {
        popped.push(stack.pop().ok_or(CalcError::StackUnderflow)?);
    }
    popped.reverse(); // popped[i] is now q_i
    stack.push(kernel::compose(&p, k, &popped));
    Ok(None)
}

fn parse_unsigned(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u64>().ok()
}

fn parse_signed(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i64>().ok()
}
