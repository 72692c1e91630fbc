//! Error types for the command interpreter.
//!
//! This module provides `CalcError`, the closed set of non-fatal diagnostics
//! the calculator can emit. Each variant corresponds to exactly one of the
//! diagnostic lines the protocol recognizes; there is no catch-all variant
//! because the protocol itself defines no catch-all.

use std::fmt;

/// A non-fatal error encountered while processing a single input line.
///
/// Every variant renders to the exact uppercase diagnostic text that follows
/// `ERROR <line>` on stderr. Allocation failure is not represented here: it
/// is fatal and terminates the process immediately rather than being
/// reported per-line (see the crate's resource model notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The line did not match any known command, or its separator was malformed.
    WrongCommand,
    /// A command needed more operands than the stack currently holds.
    StackUnderflow,
    /// A polynomial literal failed grammar validation.
    WrongPoly,
    /// `DEG_BY`'s argument was missing, ill-formed, or out of range.
    DegByWrongVariable,
    /// `AT`'s argument was missing, ill-formed, or out of range.
    AtWrongValue,
    /// `COMPOSE`'s argument was missing, ill-formed, or out of range.
    ComposeWrongParameter,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CalcError::WrongCommand => "WRONG COMMAND",
            CalcError::StackUnderflow => "STACK UNDERFLOW",
            CalcError::WrongPoly => "WRONG POLY",
            CalcError::DegByWrongVariable => "DEG BY WRONG VARIABLE",
            CalcError::AtWrongValue => "AT WRONG VALUE",
            CalcError::ComposeWrongParameter => "COMPOSE WRONG PARAMETER",
        };
        write!(f, "{text}")
    }
}

impl std::error::Error for CalcError {}
