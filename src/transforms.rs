//! Catalogue of named total transforms.
//!
//! Every transform here maps any `i64` to `Some` or `None` without panicking,
//! so each one is safe to use as a chain step.

use crate::chain::Step;
use crate::errors::ChainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Halve an even number; odd numbers have no half.
pub fn half(x: i64) -> Option<i64> {
    (x % 2 == 0).then_some(x / 2)
}

/// Divide by three when the division is exact.
pub fn third(x: i64) -> Option<i64> {
    (x % 3 == 0).then_some(x / 3)
}

/// Subtract one from a positive number.
pub fn decrement(x: i64) -> Option<i64> {
    (x > 0).then(|| x - 1)
}

/// Flip the sign; `i64::MIN` has no positive counterpart.
pub fn negate(x: i64) -> Option<i64> {
    x.checked_neg()
}

/// The named steps a chain can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Half,
    Third,
    Decrement,
    Negate,
}

impl StepKind {
    /// All catalogue entries, in display order.
    pub fn all() -> &'static [StepKind] {
        &[
            StepKind::Half,
            StepKind::Third,
            StepKind::Decrement,
            StepKind::Negate,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Half => "half",
            StepKind::Third => "third",
            StepKind::Decrement => "decrement",
            StepKind::Negate => "negate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepKind::Half => "x / 2 if x is even, otherwise absent",
            StepKind::Third => "x / 3 if x is divisible by 3, otherwise absent",
            StepKind::Decrement => "x - 1 if x is positive, otherwise absent",
            StepKind::Negate => "-x unless x is i64::MIN, otherwise absent",
        }
    }

    /// The plain function behind this step.
    pub fn function(&self) -> fn(i64) -> Option<i64> {
        match self {
            StepKind::Half => half,
            StepKind::Third => third,
            StepKind::Decrement => decrement,
            StepKind::Negate => negate,
        }
    }
}

impl Step for StepKind {
    fn apply(&self, value: i64) -> Option<i64> {
        (self.function())(value)
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKind {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StepKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChainError::UnknownStep(s.to_string()))
    }
}
