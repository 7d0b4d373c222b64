//! Ledger error types.
//!
//! These cover lookup misses and type mismatches. Malformed text met during
//! normalization is never an error; it simply stays text.

use super::{Field, StationId};

/// Errors returned by ledger operations and row conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    /// No station in the ledger carries this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// The field holds text, so it cannot be summed
    #[error("field {0} is not numeric")]
    NonNumericField(Field),

    /// A raw row could not be turned into a station
    #[error("malformed row: field {field}: {reason}")]
    MalformedRow { field: Field, reason: &'static str },
}
