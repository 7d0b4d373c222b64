//! Raw row normalization and conversion into stations.
//!
//! Station data arrives as rows of text fields. [`normalize`] coerces the
//! fields that look like numbers, and [`stations_from_rows`] turns the
//! normalized rows into typed [`Station`] records.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Field, LedgerError, Station, StationId};

/// A single field of a raw row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Real(f64),
    Text(String),
}

impl Cell {
    /// A text cell, as read from the source.
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// The value, if this is an integer cell.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The value of any numeric cell.
    ///
    /// Integers are exact up to 2^53 in magnitude and rounded to the nearest
    /// representable value beyond that.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(n) => Some(*n as f64),
            Cell::Real(x) => Some(*x),
            Cell::Text(_) => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(n) => write!(f, "{n}"),
            Cell::Real(x) => write!(f, "{x}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Coerce every numeric-looking text field in place.
///
/// Whole numbers become [`Cell::Int`], other numbers (including infinities,
/// NaN and whole numbers too large for `i64`) become [`Cell::Real`], and
/// everything else is left as text. Cells that are already numeric are not
/// touched, so running this twice changes nothing.
pub fn normalize(rows: &mut [Vec<Cell>]) {
    let mut converted = 0usize;

    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            let Cell::Text(text) = cell else {
                continue;
            };
            if let Some(value) = parse_number(text) {
                *cell = numeric_cell(value);
                converted += 1;
            }
        }
    }

    debug!(rows = rows.len(), converted, "Normalized rows");
}

/// Parse text the way a permissive float parser would.
///
/// Accepts surrounding whitespace, signs, exponents, `inf`/`nan` and single
/// underscores between digits.
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    if !trimmed.contains('_') {
        return trimmed.parse().ok();
    }

    let bytes = trimmed.as_bytes();
    let underscores_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    if !underscores_ok {
        return None;
    }

    trimmed.replace('_', "").parse().ok()
}

fn numeric_cell(value: f64) -> Cell {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    let fits = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && fits {
        Cell::Int(value as i64)
    } else {
        Cell::Real(value)
    }
}

impl TryFrom<&[Cell]> for Station {
    type Error = LedgerError;

    /// Build a station from a normalized row.
    ///
    /// Columns past the seventh are ignored.
    fn try_from(row: &[Cell]) -> Result<Self, Self::Error> {
        let id = u32_field(row, Field::Id)?;

        Ok(Station {
            id: StationId::new(id),
            name: cell(row, Field::Name)?.to_string(),
            latitude: real_field(row, Field::Latitude)?,
            longitude: real_field(row, Field::Longitude)?,
            capacity: u32_field(row, Field::Capacity)?,
            bikes_available: u32_field(row, Field::BikesAvailable)?,
            docks_available: u32_field(row, Field::DocksAvailable)?,
        })
    }
}

/// Convert a table of normalized rows into stations, keeping row order.
///
/// Fails on the first row that does not describe a station.
pub fn stations_from_rows(rows: &[Vec<Cell>]) -> Result<Vec<Station>, LedgerError> {
    rows.iter()
        .map(|row| Station::try_from(row.as_slice()))
        .collect()
}

fn cell(row: &[Cell], field: Field) -> Result<&Cell, LedgerError> {
    row.get(field.index()).ok_or(LedgerError::MalformedRow {
        field,
        reason: "missing",
    })
}

fn u32_field(row: &[Cell], field: Field) -> Result<u32, LedgerError> {
    let value = cell(row, field)?;
    let n = value.as_i64().ok_or(LedgerError::MalformedRow {
        field,
        reason: "expected a whole number",
    })?;
    u32::try_from(n).map_err(|_| LedgerError::MalformedRow {
        field,
        reason: "out of range",
    })
}

fn real_field(row: &[Cell], field: Field) -> Result<f64, LedgerError> {
    cell(row, field)?.as_f64().ok_or(LedgerError::MalformedRow {
        field,
        reason: "expected a number",
    })
}
