//! Station records.

use serde::{Deserialize, Serialize};

use super::StationId;

/// Marker embedded in a station's name when the station has no kiosk.
pub const NO_KIOSK: &str = "SMART";

/// A bike-share station.
///
/// Field order matches the raw row layout described by
/// [`Field`](super::Field).
/// The capacity invariant (`bikes_available + docks_available <= capacity`)
/// is not checked on construction; see [`Station::is_consistent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: u32,
    pub bikes_available: u32,
    pub docks_available: u32,
}

impl Station {
    /// Create a station from its seven fields, in column order.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        capacity: u32,
        bikes_available: u32,
        docks_available: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            capacity,
            bikes_available,
            docks_available,
        }
    }

    /// Whether the station has a payment kiosk.
    ///
    /// The marker only has to appear somewhere in the name.
    pub fn has_kiosk(&self) -> bool {
        !self.name.contains(NO_KIOSK)
    }

    /// Whether docked bikes plus free docks fit within capacity.
    pub fn is_consistent(&self) -> bool {
        u64::from(self.bikes_available) + u64::from(self.docks_available)
            <= u64::from(self.capacity)
    }

    /// Summary of the station's current availability.
    pub fn info(&self) -> StationInfo {
        StationInfo {
            name: self.name.clone(),
            bikes_available: self.bikes_available,
            docks_available: self.docks_available,
            has_kiosk: self.has_kiosk(),
        }
    }
}

/// Availability summary returned by a station lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub name: String,
    pub bikes_available: u32,
    pub docks_available: u32,
    pub has_kiosk: bool,
}
