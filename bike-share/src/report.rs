//! Ledger summary produced by a run of every ledger operation.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::domain::{ColumnSum, Field, LedgerError, Station, StationId, StationInfo};
use crate::ledger::{
    get_column_sum, get_nearest_station, get_station_info, get_stations_with_kiosks,
    inconsistent_stations, rent_bike, return_bike, upgrade_stations,
};

/// Outcome of a rent attempt, with "not found" kept apart from "no bikes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RentOutcome {
    Rented,
    NoBikes,
    NotFound,
}

/// Everything a run learned about the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerReport {
    pub station_count: usize,
    pub total_capacity: ColumnSum,
    pub total_bikes: ColumnSum,
    pub total_docks: ColumnSum,
    pub kiosk_stations: Vec<StationId>,
    pub nearest_station: Option<StationId>,
    pub nearest_info: Option<StationInfo>,
    pub rent: RentOutcome,
    pub returned: bool,
    pub bikes_added: u64,
    pub inconsistent_stations: Vec<StationId>,
    pub stations: Vec<Station>,
}

/// Run the queries, then rent, return and upgrade as configured.
///
/// Totals, kiosks and the nearest station describe the ledger before any
/// mutation; `stations` is the ledger after all of them.
pub fn run(config: &RunConfig, stations: &mut [Station]) -> Result<LedgerReport, LedgerError> {
    let inconsistent = inconsistent_stations(stations);
    if !inconsistent.is_empty() {
        warn!(stations = ?inconsistent, "Stations exceed their capacity");
    }

    let total_capacity = get_column_sum(Field::Capacity, stations)?;
    let total_bikes = get_column_sum(Field::BikesAvailable, stations)?;
    let total_docks = get_column_sum(Field::DocksAvailable, stations)?;
    let kiosk_stations = get_stations_with_kiosks(stations);

    let nearest_station = get_nearest_station(config.query_lat, config.query_lon, stations);
    let nearest_info = nearest_station
        .map(|id| get_station_info(id, stations))
        .transpose()?;

    let rent = match rent_bike(config.rent_station, stations) {
        Ok(true) => RentOutcome::Rented,
        Ok(false) => RentOutcome::NoBikes,
        Err(LedgerError::StationNotFound(_)) => RentOutcome::NotFound,
        Err(e) => return Err(e),
    };
    let returned = return_bike(config.return_station, stations);
    let bikes_added = upgrade_stations(config.capacity_threshold, config.bikes_to_add, stations);

    info!(
        stations = stations.len(),
        total_bikes = %total_bikes,
        nearest = ?nearest_station,
        ?rent,
        returned,
        bikes_added,
        "Ledger run complete"
    );

    Ok(LedgerReport {
        station_count: stations.len(),
        total_capacity,
        total_bikes,
        total_docks,
        kiosk_stations,
        nearest_station,
        nearest_info,
        rent,
        returned,
        bikes_added,
        inconsistent_stations: inconsistent_stations(stations),
        stations: stations.to_vec(),
    })
}
