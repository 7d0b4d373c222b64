//! Domain types for the station ledger.
//!
//! A station is a named-field record; [`Field`] keeps the positional
//! column layout available for code that deals with raw rows.

mod column_sum;
mod error;
mod field;
mod station;
mod station_id;

pub use column_sum::ColumnSum;
pub use error::LedgerError;
pub use field::Field;
pub use station::{NO_KIOSK, Station, StationInfo};
pub use station_id::{InvalidStationId, StationId};
