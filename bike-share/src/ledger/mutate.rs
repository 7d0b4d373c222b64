//! In-place ledger updates.
//!
//! Rent and return move one bike between a station's docked count and its
//! free docks, so their sum never changes. An upgrade adds the same amount
//! to bikes and capacity. A station that satisfied the capacity invariant
//! before any of these still satisfies it afterwards. A change that would
//! overflow a count is not applied at all.

use tracing::{debug, trace, warn};

use crate::domain::{LedgerError, Station, StationId};

/// Rent a bike from the first station with the given id.
///
/// Returns `Ok(true)` if a bike was taken, `Ok(false)` (with no change) if
/// the station is empty or its free docks cannot grow, and [`LedgerError::StationNotFound`] if no station
/// has this id.
pub fn rent_bike(id: StationId, stations: &mut [Station]) -> Result<bool, LedgerError> {
    let station = stations
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(LedgerError::StationNotFound(id))?;

    if station.bikes_available == 0 {
        debug!(station = %id, "No bikes to rent");
        return Ok(false);
    }

    let Some(docks) = station.docks_available.checked_add(1) else {
        warn!(station = %id, "Dock count would overflow, rent refused");
        return Ok(false);
    };

    station.bikes_available -= 1;
    station.docks_available = docks;
    trace!(
        station = %id,
        bikes = station.bikes_available,
        docks = station.docks_available,
        "Bike rented"
    );
    Ok(true)
}

/// Return a bike to the first station with the given id.
///
/// Returns `false` without touching the ledger if the station has no free
/// dock, its bike count cannot grow, or no station has this id.
pub fn return_bike(id: StationId, stations: &mut [Station]) -> bool {
    let Some(station) = stations.iter_mut().find(|s| s.id == id) else {
        debug!(station = %id, "Return to unknown station");
        return false;
    };

    if station.docks_available == 0 {
        debug!(station = %id, "No free docks for return");
        return false;
    }

    let Some(bikes) = station.bikes_available.checked_add(1) else {
        warn!(station = %id, "Bike count would overflow, return refused");
        return false;
    };

    station.bikes_available = bikes;
    station.docks_available -= 1;
    trace!(
        station = %id,
        bikes = station.bikes_available,
        docks = station.docks_available,
        "Bike returned"
    );
    true
}

/// Add bikes, each with a new dock, to every station below a capacity threshold.
///
/// Stations with `capacity < capacity_threshold` get `bikes_to_add` more
/// bikes and `bikes_to_add` more capacity. A qualifying station whose bike
/// count or capacity would overflow is left as it is. Returns the total
/// number of bikes actually added across the ledger.
pub fn upgrade_stations(capacity_threshold: u32, bikes_to_add: u32, stations: &mut [Station]) -> u64 {
    let mut total_added = 0u64;
    let mut upgraded = 0usize;
    let mut skipped = 0usize;

    for station in stations.iter_mut() {
        if station.capacity >= capacity_threshold {
            continue;
        }

        let grown = station
            .bikes_available
            .checked_add(bikes_to_add)
            .zip(station.capacity.checked_add(bikes_to_add));
        let Some((bikes, capacity)) = grown else {
            warn!(station = %station.id, bikes_to_add, "Upgrade would overflow, station skipped");
            skipped += 1;
            continue;
        };

        station.bikes_available = bikes;
        station.capacity = capacity;
        total_added += u64::from(bikes_to_add);
        upgraded += 1;
    }

    debug!(
        capacity_threshold,
        bikes_to_add, upgraded, skipped, total_added, "Stations upgraded"
    );
    total_added
}
