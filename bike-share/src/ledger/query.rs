//! Read-only ledger queries.

use crate::domain::{ColumnSum, Field, LedgerError, Station, StationId, StationInfo};
use crate::geo::lat_lon_distance;

/// Whether the station has a payment kiosk.
pub fn has_kiosk(station: &Station) -> bool {
    station.has_kiosk()
}

/// Look up the availability of the first station with the given id.
pub fn get_station_info(id: StationId, stations: &[Station]) -> Result<StationInfo, LedgerError> {
    stations
        .iter()
        .find(|s| s.id == id)
        .map(Station::info)
        .ok_or(LedgerError::StationNotFound(id))
}

/// Sum a numeric field across all stations.
///
/// Ids and counts give [`ColumnSum::Int`], coordinates [`ColumnSum::Real`].
/// The name is text, so summing it fails even for an empty ledger.
pub fn get_column_sum(field: Field, stations: &[Station]) -> Result<ColumnSum, LedgerError> {
    match field {
        Field::Id => Ok(int_sum(stations, |s| s.id.get())),
        Field::Name => Err(LedgerError::NonNumericField(field)),
        Field::Latitude => Ok(real_sum(stations, |s| s.latitude)),
        Field::Longitude => Ok(real_sum(stations, |s| s.longitude)),
        Field::Capacity => Ok(int_sum(stations, |s| s.capacity)),
        Field::BikesAvailable => Ok(int_sum(stations, |s| s.bikes_available)),
        Field::DocksAvailable => Ok(int_sum(stations, |s| s.docks_available)),
    }
}

fn int_sum(stations: &[Station], value: impl Fn(&Station) -> u32) -> ColumnSum {
    ColumnSum::Int(stations.iter().map(|s| i64::from(value(s))).sum())
}

fn real_sum(stations: &[Station], value: impl Fn(&Station) -> f64) -> ColumnSum {
    ColumnSum::Real(stations.iter().map(value).sum())
}

/// Ids of the stations that have a kiosk, in ledger order.
pub fn get_stations_with_kiosks(stations: &[Station]) -> Vec<StationId> {
    stations
        .iter()
        .filter(|s| has_kiosk(s))
        .map(|s| s.id)
        .collect()
}

/// Id of the station closest to the given coordinates.
///
/// On an exact tie the station appearing later in the ledger wins.
/// Returns `None` for an empty ledger.
pub fn get_nearest_station(lat: f64, lon: f64, stations: &[Station]) -> Option<StationId> {
    let mut min_distance = f64::INFINITY;
    let mut nearest = None;

    for station in stations {
        let distance = lat_lon_distance(lat, lon, station.latitude, station.longitude);
        // `<=` so that later stations win ties
        if distance <= min_distance {
            min_distance = distance;
            nearest = Some(station.id);
        }
    }

    nearest
}

/// Ids of stations whose bikes and free docks exceed their capacity.
pub fn inconsistent_stations(stations: &[Station]) -> Vec<StationId> {
    stations
        .iter()
        .filter(|s| !s.is_consistent())
        .map(|s| s.id)
        .collect()
}
