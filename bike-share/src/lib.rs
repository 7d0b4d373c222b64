//! Bike-share station ledger.
//!
//! Normalizes raw station rows, answers questions about a ledger of
//! stations (kiosks, availability, totals, nearest station) and applies
//! rentals, returns and capacity upgrades in place.

pub mod config;
pub mod domain;
pub mod geo;
pub mod ledger;
pub mod normalize;
pub mod report;
pub mod sample;
