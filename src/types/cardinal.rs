//! 16-point compass directions derived from degree bearings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 16-point compass label. Bearings are divided into 22.5 degree sectors
/// centered on each label, with 360 wrapping back to N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cardinal {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

const SECTOR_DEGREES: f64 = 22.5;

const ORDERED: [Cardinal; 16] = [
    Cardinal::N,
    Cardinal::Nne,
    Cardinal::Ne,
    Cardinal::Ene,
    Cardinal::E,
    Cardinal::Ese,
    Cardinal::Se,
    Cardinal::Sse,
    Cardinal::S,
    Cardinal::Ssw,
    Cardinal::Sw,
    Cardinal::Wsw,
    Cardinal::W,
    Cardinal::Wnw,
    Cardinal::Nw,
    Cardinal::Nnw,
];

impl Cardinal {
    /// Maps a compass bearing in degrees to its cardinal label.
    ///
    /// Bearings outside [0, 360) are normalized first, so 360 maps to N and
    /// negative bearings wrap the other way.
    pub fn from_bearing(bearing: f64) -> Cardinal {
        let normalized = bearing.rem_euclid(360.0);
        let sector = (normalized / SECTOR_DEGREES).round() as usize % ORDERED.len();
        ORDERED[sector]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinal::N => "N",
            Cardinal::Nne => "NNE",
            Cardinal::Ne => "NE",
            Cardinal::Ene => "ENE",
            Cardinal::E => "E",
            Cardinal::Ese => "ESE",
            Cardinal::Se => "SE",
            Cardinal::Sse => "SSE",
            Cardinal::S => "S",
            Cardinal::Ssw => "SSW",
            Cardinal::Sw => "SW",
            Cardinal::Wsw => "WSW",
            Cardinal::W => "W",
            Cardinal::Wnw => "WNW",
            Cardinal::Nw => "NW",
            Cardinal::Nnw => "NNW",
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_bearings_map_to_cardinal_points() {
        assert_eq!(Cardinal::from_bearing(0.0), Cardinal::N);
        assert_eq!(Cardinal::from_bearing(90.0), Cardinal::E);
        assert_eq!(Cardinal::from_bearing(180.0), Cardinal::S);
        assert_eq!(Cardinal::from_bearing(270.0), Cardinal::W);
    }

    #[test]
    fn full_circle_wraps_to_north() {
        assert_eq!(Cardinal::from_bearing(360.0), Cardinal::N);
        assert_eq!(Cardinal::from_bearing(720.0), Cardinal::N);
    }

    #[test]
    fn sectors_are_centered_on_labels() {
        // 11.25 degrees is the boundary between N and NNE
        assert_eq!(Cardinal::from_bearing(11.0), Cardinal::N);
        assert_eq!(Cardinal::from_bearing(12.0), Cardinal::Nne);
        // 348.75 degrees is the boundary between NNW and N
        assert_eq!(Cardinal::from_bearing(348.0), Cardinal::Nnw);
        assert_eq!(Cardinal::from_bearing(349.0), Cardinal::N);
    }

    #[test]
    fn negative_bearings_wrap() {
        assert_eq!(Cardinal::from_bearing(-90.0), Cardinal::W);
    }

    #[test]
    fn serializes_to_uppercase_labels() {
        let json = serde_json::to_string(&Cardinal::Nne).unwrap();
        assert_eq!(json, "\"NNE\"");
    }
}
