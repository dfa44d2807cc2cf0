use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of GPS data a babel command operates on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FeatureType {
    Waypoint,
    Track,
    Route,
}

impl FeatureType {
    pub const ALL: [FeatureType; 3] = [
        FeatureType::Waypoint,
        FeatureType::Track,
        FeatureType::Route,
    ];

    /// The babel argument selecting this feature type.
    pub fn babel_flag(self) -> &'static str {
        self.into()
    }
}

impl From<FeatureType> for &str {
    fn from(x: FeatureType) -> &'static str {
        match x {
            FeatureType::Waypoint => "-w",
            FeatureType::Track => "-t",
            FeatureType::Route => "-r",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FeatureType::Waypoint => "waypoint",
            FeatureType::Track => "track",
            FeatureType::Route => "route",
        })
    }
}

impl FromStr for FeatureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "waypoint" | "waypoints" => Ok(FeatureType::Waypoint),
            "t" | "track" | "tracks" => Ok(FeatureType::Track),
            "r" | "route" | "routes" => Ok(FeatureType::Route),
            _ => Err(Error::UnknownFeatureType { name: s.to_owned() }),
        }
    }
}

/// Import converts a foreign format into GPX, export goes the other way.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Import,
    Export,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Direction::Import => "import",
            Direction::Export => "export",
        })
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "import" | "download" => Ok(Direction::Import),
            "export" | "upload" => Ok(Direction::Export),
            _ => Err(Error::UnknownDirection { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        assert_eq!(FeatureType::Waypoint.babel_flag(), "-w");
        assert_eq!(FeatureType::Track.babel_flag(), "-t");
        assert_eq!(FeatureType::Route.babel_flag(), "-r");
    }

    #[test]
    fn parse_feature_type() {
        assert_eq!("Track".parse::<FeatureType>().unwrap(), FeatureType::Track);
        assert_eq!("w".parse::<FeatureType>().unwrap(), FeatureType::Waypoint);
        assert_eq!(" routes ".parse::<FeatureType>().unwrap(), FeatureType::Route);
        assert!("polygon".parse::<FeatureType>().is_err());
    }

    #[test]
    fn parse_direction() {
        assert_eq!("import".parse::<Direction>().unwrap(), Direction::Import);
        assert_eq!("upload".parse::<Direction>().unwrap(), Direction::Export);
        match "sideways".parse::<Direction>() {
            Err(Error::UnknownDirection { name }) => assert_eq!(name, "sideways"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
