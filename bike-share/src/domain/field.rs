//! Station record field names.

use std::fmt;

/// A field of a station record.
///
/// Variants are declared in the record's positional order, so `index()`
/// gives the column a field occupies in a raw row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Latitude,
    Longitude,
    Capacity,
    BikesAvailable,
    DocksAvailable,
}

impl Field {
    /// Column position of this field in a raw row.
    pub const fn index(self) -> usize {
        match self {
            Field::Id => 0,
            Field::Name => 1,
            Field::Latitude => 2,
            Field::Longitude => 3,
            Field::Capacity => 4,
            Field::BikesAvailable => 5,
            Field::DocksAvailable => 6,
        }
    }

    /// Snake-case name, as used in serialized records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Capacity => "capacity",
            Field::BikesAvailable => "bikes_available",
            Field::DocksAvailable => "docks_available",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_positions_are_fixed() {
        assert_eq!(Field::Id.index(), 0);
        assert_eq!(Field::Name.index(), 1);
        assert_eq!(Field::Latitude.index(), 2);
        assert_eq!(Field::Longitude.index(), 3);
        assert_eq!(Field::Capacity.index(), 4);
        assert_eq!(Field::BikesAvailable.index(), 5);
        assert_eq!(Field::DocksAvailable.index(), 6);
    }

    #[test]
    fn display() {
        assert_eq!(Field::BikesAvailable.to_string(), "bikes_available");
        assert_eq!(Field::Name.to_string(), "name");
    }
}
