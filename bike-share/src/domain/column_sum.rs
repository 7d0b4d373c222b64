//! Column totals.

use std::fmt;

use serde::Serialize;

/// Sum of one column across a ledger.
///
/// Count and id columns add up to an integer; coordinate columns to a real.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnSum {
    Int(i64),
    Real(f64),
}

impl fmt::Display for ColumnSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSum::Int(n) => write!(f, "{n}"),
            ColumnSum::Real(x) => write!(f, "{x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ColumnSum::Int(23).to_string(), "23");
        assert_eq!(ColumnSum::Real(1.5).to_string(), "1.5");
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&ColumnSum::Int(58)).unwrap(), "58");
        assert_eq!(serde_json::to_string(&ColumnSum::Real(-0.5)).unwrap(), "-0.5");
    }
}
