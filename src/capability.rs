use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use itertools::Itertools;

use crate::error::Error;
use crate::feature::{Direction, FeatureType};

bitflags! {
    /// What a babel format advertises. Any combination is legal, including
    /// directions without a feature type; such a set advertises nothing usable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const IMPORT = 1 << 0;
        const EXPORT = 1 << 1;
        const WAYPOINTS = 1 << 2;
        const ROUTES = 1 << 3;
        const TRACKS = 1 << 4;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::empty()
    }
}

impl Capabilities {
    /// Whether both the direction and the feature type are advertised.
    pub fn supports(self, direction: Direction, feature: FeatureType) -> bool {
        self.contains(Capabilities::from(direction) | Capabilities::from(feature))
    }
}

impl From<FeatureType> for Capabilities {
    fn from(x: FeatureType) -> Capabilities {
        match x {
            FeatureType::Waypoint => Capabilities::WAYPOINTS,
            FeatureType::Track => Capabilities::TRACKS,
            FeatureType::Route => Capabilities::ROUTES,
        }
    }
}

impl From<Direction> for Capabilities {
    fn from(x: Direction) -> Capabilities {
        match x {
            Direction::Import => Capabilities::IMPORT,
            Direction::Export => Capabilities::EXPORT,
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names = self.iter_names().map(|(name, _)| name.to_ascii_lowercase());
        f.write_str(&names.join("|"))
    }
}

// Accepts the Display form, e.g. "import|waypoints|tracks". Empty input is the empty set.
impl FromStr for Capabilities {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == '|' || c == ',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                Capabilities::from_name(&p.to_ascii_uppercase())
                    .ok_or_else(|| Error::UnknownCapability { name: p.to_owned() })
            })
            .fold_results(Capabilities::empty(), |acc, c| acc | c)
    }
}
