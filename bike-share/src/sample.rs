//! Sample station data.
//!
//! Three Toronto stations, available both as raw text rows (as they would
//! be read from a feed) and as already-converted stations.

use crate::domain::{Station, StationId};
use crate::normalize::Cell;

const SAMPLE_ROWS: [[&str; 7]; 3] = [
    [
        "7090",
        "Danforth Ave / Lamb Ave",
        "43.681991",
        "-79.329455",
        "15",
        "4",
        "10",
    ],
    [
        "7486",
        "Gerrard St E / Ted Reeve Dr",
        "43.684261",
        "-79.299332",
        "24",
        "5",
        "19",
    ],
    [
        "7571",
        "Highfield Rd / Gerrard St E - SMART",
        "43.671685",
        "-79.325176",
        "19",
        "14",
        "5",
    ],
];

/// The sample stations as unnormalized text rows.
pub fn sample_rows() -> Vec<Vec<Cell>> {
    SAMPLE_ROWS
        .iter()
        .map(|row| row.iter().map(|field| Cell::from(*field)).collect())
        .collect()
}

/// The sample stations, in the same order as [`sample_rows`].
pub fn sample_stations() -> Vec<Station> {
    vec![
        Station::new(
            StationId::new(7090),
            "Danforth Ave / Lamb Ave",
            43.681991,
            -79.329455,
            15,
            4,
            10,
        ),
        Station::new(
            StationId::new(7486),
            "Gerrard St E / Ted Reeve Dr",
            43.684261,
            -79.299332,
            24,
            5,
            19,
        ),
        Station::new(
            StationId::new(7571),
            "Highfield Rd / Gerrard St E - SMART",
            43.671685,
            -79.325176,
            19,
            14,
            5,
        ),
    ]
}
