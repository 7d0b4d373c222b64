//! Station ledger operations.
//!
//! A ledger is any ordered slice of [`Station`](crate::domain::Station)s
//! owned by the caller. Queries borrow it, mutations take `&mut` and update
//! stations in place. Lookups by id stop at the first matching station.

mod mutate;
mod query;

pub use mutate::{rent_bike, return_bike, upgrade_stations};
pub use query::{
    get_column_sum, get_nearest_station, get_station_info, get_stations_with_kiosks, has_kiosk,
    inconsistent_stations,
};
