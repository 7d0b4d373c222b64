//! Configuration for the `bike-share` binary.

use std::str::FromStr;

use crate::domain::StationId;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Parameters for a run over the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Latitude of the nearest-station query.
    pub query_lat: f64,

    /// Longitude of the nearest-station query.
    pub query_lon: f64,

    /// Stations with capacity below this are upgraded.
    pub capacity_threshold: u32,

    /// Bikes (and docks) added to each upgraded station.
    pub bikes_to_add: u32,

    /// Station to rent a bike from.
    pub rent_station: StationId,

    /// Station to return a bike to.
    pub return_station: StationId,
}

impl RunConfig {
    /// Environment variable names, in field order.
    pub const ENV_QUERY_LAT: &'static str = "BIKE_SHARE_QUERY_LAT";
    pub const ENV_QUERY_LON: &'static str = "BIKE_SHARE_QUERY_LON";
    pub const ENV_CAPACITY_THRESHOLD: &'static str = "BIKE_SHARE_CAPACITY_THRESHOLD";
    pub const ENV_BIKES_TO_ADD: &'static str = "BIKE_SHARE_BIKES_TO_ADD";
    pub const ENV_RENT_STATION: &'static str = "BIKE_SHARE_RENT_STATION";
    pub const ENV_RETURN_STATION: &'static str = "BIKE_SHARE_RETURN_STATION";

    /// Create a new configuration with the given parameters.
    pub fn new(
        query_lat: f64,
        query_lon: f64,
        capacity_threshold: u32,
        bikes_to_add: u32,
        rent_station: StationId,
        return_station: StationId,
    ) -> Self {
        Self {
            query_lat,
            query_lon,
            capacity_threshold,
            bikes_to_add,
            rent_station,
            return_station,
        }
    }

    /// Read the configuration from `BIKE_SHARE_*` environment variables.
    ///
    /// Unset variables keep their default; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            query_lat: read(&lookup, Self::ENV_QUERY_LAT, defaults.query_lat)?,
            query_lon: read(&lookup, Self::ENV_QUERY_LON, defaults.query_lon)?,
            capacity_threshold: read(
                &lookup,
                Self::ENV_CAPACITY_THRESHOLD,
                defaults.capacity_threshold,
            )?,
            bikes_to_add: read(&lookup, Self::ENV_BIKES_TO_ADD, defaults.bikes_to_add)?,
            rent_station: read_station(&lookup, Self::ENV_RENT_STATION, defaults.rent_station)?,
            return_station: read_station(
                &lookup,
                Self::ENV_RETURN_STATION,
                defaults.return_station,
            )?,
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            query_lat: 43.7,
            query_lon: -79.3,
            capacity_threshold: 20,
            bikes_to_add: 10,
            rent_station: StationId::new(7090),
            return_station: StationId::new(7090),
        }
    }
}

fn read<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn read_station(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: StationId,
) -> Result<StationId, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => StationId::parse(&value).map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = RunConfig::default();

        assert_eq!(config.query_lat, 43.7);
        assert_eq!(config.query_lon, -79.3);
        assert_eq!(config.capacity_threshold, 20);
        assert_eq!(config.bikes_to_add, 10);
        assert_eq!(config.rent_station, StationId::new(7090));
        assert_eq!(config.return_station, StationId::new(7090));
    }

    #[test]
    fn custom_config() {
        let config = RunConfig::new(1.0, 2.0, 30, 5, StationId::new(1), StationId::new(2));

        assert_eq!(config.query_lat, 1.0);
        assert_eq!(config.query_lon, 2.0);
        assert_eq!(config.capacity_threshold, 30);
        assert_eq!(config.bikes_to_add, 5);
        assert_eq!(config.rent_station, StationId::new(1));
        assert_eq!(config.return_station, StationId::new(2));
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = RunConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = RunConfig::from_lookup(lookup_from(&[
            ("BIKE_SHARE_QUERY_LAT", "43.68"),
            ("BIKE_SHARE_CAPACITY_THRESHOLD", " 25 "),
            ("BIKE_SHARE_RENT_STATION", "7571"),
        ]))
        .unwrap();

        assert_eq!(config.query_lat, 43.68);
        assert_eq!(config.query_lon, -79.3);
        assert_eq!(config.capacity_threshold, 25);
        assert_eq!(config.bikes_to_add, 10);
        assert_eq!(config.rent_station, StationId::new(7571));
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = RunConfig::from_lookup(lookup_from(&[("BIKE_SHARE_BIKES_TO_ADD", "-3")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "BIKE_SHARE_BIKES_TO_ADD",
                value: "-3".to_string(),
            }
        );

        let err = RunConfig::from_lookup(lookup_from(&[("BIKE_SHARE_RETURN_STATION", "abc")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for BIKE_SHARE_RETURN_STATION: \"abc\""
        );
    }
}
