//! Station identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A bike-share station identifier.
///
/// Identifiers are non-negative integers assigned by the operator. They are
/// assumed to be unique within a ledger, but nothing here checks that.
///
/// # Examples
///
/// ```
/// use bike_share::domain::StationId;
///
/// let id = StationId::parse("7090").unwrap();
/// assert_eq!(id.get(), 7090);
///
/// // Signs, fractions and words are rejected
/// assert!(StationId::parse("-1").is_err());
/// assert!(StationId::parse("7.5").is_err());
/// assert!(StationId::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    /// Wrap a raw identifier.
    pub const fn new(id: u32) -> Self {
        StationId(id)
    }

    /// Parse an identifier from its decimal form.
    ///
    /// Surrounding whitespace is ignored; anything other than ASCII digits
    /// is rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let s = s.trim();

        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStationId {
                reason: "must contain only ASCII digits",
            });
        }

        s.parse::<u32>().map(StationId).map_err(|_| InvalidStationId {
            reason: "out of range",
        })
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(StationId::parse("7090").unwrap().get(), 7090);
        assert_eq!(StationId::parse("0").unwrap().get(), 0);
        assert_eq!(StationId::parse(" 7486 ").unwrap().get(), 7486);
    }

    #[test]
    fn reject_empty() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse("   ").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(StationId::parse("-7").is_err());
        assert!(StationId::parse("+7").is_err());
        assert!(StationId::parse("7.0").is_err());
        assert!(StationId::parse("70a").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        let err = StationId::parse("99999999999").unwrap_err();
        assert_eq!(err.to_string(), "invalid station id: out of range");
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::new(7571);
        assert_eq!(format!("{}", id), "7571");
        assert_eq!(format!("{:?}", id), "StationId(7571)");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&StationId::new(7090)).unwrap();
        assert_eq!(json, "7090");
    }
}
