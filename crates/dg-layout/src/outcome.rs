// ABOUTME: Results of configuration changes.
// ABOUTME: Invalid input is ignored or clamped, never raised to the host.

use crate::property::{Property, ValueKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Track count must not be negative (got {0})")]
    NegativeCount(i64),

    #[error("Separator thickness must be positive (got {0})")]
    NonPositiveThickness(i64),

    #[error("{property} expects a {expected} value, got {found}")]
    TypeMismatch {
        property: Property,
        expected: ValueKind,
        found: ValueKind,
    },
}

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value was stored and the grid reconciled
    Applied,
    /// An out-of-range value was replaced before reconciling
    Clamped { requested: i64, applied: i64 },
    /// Nothing changed
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied | Outcome::Clamped { .. })
    }
}
