//! Unit systems accepted by the API and the fixed unit tables describing the
//! measurement units of a response formatted with each system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unit system token sent with a forecast request via `units=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Let the API pick units based on the requested location. There is no
    /// fixed unit table for this choice.
    Auto,
    /// Identical to [`UnitSystem::Us`] except wind speed is in km/h.
    Ca,
    /// Identical to [`UnitSystem::Si`] except distances are in miles and wind
    /// speed is in mph.
    Uk2,
    /// US customary units. The API default.
    Us,
    /// SI units.
    Si,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Auto => "auto",
            UnitSystem::Ca => "ca",
            UnitSystem::Uk2 => "uk2",
            UnitSystem::Us => "us",
            UnitSystem::Si => "si",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[
            UnitSystem::Auto,
            UnitSystem::Ca,
            UnitSystem::Uk2,
            UnitSystem::Us,
            UnitSystem::Si,
        ]
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("'{0}' is not an accepted API unit")]
pub struct UnknownUnitSystem(pub String);

impl FromStr for UnitSystem {
    type Err = UnknownUnitSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(UnitSystem::Auto),
            "ca" => Ok(UnitSystem::Ca),
            "uk2" => Ok(UnitSystem::Uk2),
            "us" => Ok(UnitSystem::Us),
            "si" => Ok(UnitSystem::Si),
            _ => Err(UnknownUnitSystem(s.to_string())),
        }
    }
}

/// The unit symbol for every measurement category of a weather response.
///
/// Tables are fixed per unit system. The Canadian and UK tables are derived
/// from the US and SI tables by overriding specific entries, so they can
/// never drift from their base table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTable {
    pub nearest_storm_distance: &'static str,
    pub precip_intensity: &'static str,
    pub precip_intensity_max: &'static str,
    pub precip_accumulation: &'static str,
    pub temperature: &'static str,
    pub temperature_min: &'static str,
    pub temperature_max: &'static str,
    pub apparent_temperature: &'static str,
    pub dew_point: &'static str,
    pub wind_speed: &'static str,
    pub pressure: &'static str,
    pub visibility: &'static str,
}

impl UnitTable {
    /// US customary units.
    pub const fn us() -> Self {
        Self {
            nearest_storm_distance: "mi",
            precip_intensity: "in/h",
            precip_intensity_max: "in/h",
            precip_accumulation: "in",
            temperature: "f",
            temperature_min: "f",
            temperature_max: "f",
            apparent_temperature: "f",
            dew_point: "f",
            wind_speed: "mph",
            pressure: "mbar",
            visibility: "mi",
        }
    }

    /// SI units.
    pub const fn si() -> Self {
        Self {
            nearest_storm_distance: "km",
            precip_intensity: "mm/h",
            precip_intensity_max: "mm/h",
            precip_accumulation: "cm",
            temperature: "c",
            temperature_min: "c",
            temperature_max: "c",
            apparent_temperature: "c",
            dew_point: "c",
            wind_speed: "mps",
            pressure: "hPa",
            visibility: "km",
        }
    }

    /// Canadian units, derived from [`UnitTable::us`].
    pub const fn ca() -> Self {
        Self {
            wind_speed: "km/h",
            ..Self::us()
        }
    }

    /// UK units, derived from [`UnitTable::si`].
    pub const fn uk2() -> Self {
        Self {
            nearest_storm_distance: "mi",
            visibility: "mi",
            wind_speed: "mph",
            ..Self::si()
        }
    }

    /// The fixed table for a unit system.
    ///
    /// [`UnitSystem::Auto`] has no fixed table because the API decides units
    /// per location; it falls back to the US table here. Callers that need to
    /// surface that degradation warn before calling this.
    pub const fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Us | UnitSystem::Auto => Self::us(),
            UnitSystem::Si => Self::si(),
            UnitSystem::Ca => Self::ca(),
            UnitSystem::Uk2 => Self::uk2(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_system_token_roundtrip() {
        for system in UnitSystem::all() {
            let parsed = system.as_str().parse::<UnitSystem>().unwrap();
            assert_eq!(*system, parsed);
        }
    }

    #[test]
    fn unknown_unit_token_is_rejected() {
        let err = "metric".parse::<UnitSystem>().unwrap_err();
        assert!(err.to_string().contains("not an accepted API unit"));
    }

    #[test]
    fn ca_table_only_overrides_wind_speed() {
        let us = UnitTable::us();
        let ca = UnitTable::ca();
        assert_eq!(ca.wind_speed, "km/h");
        assert_eq!(
            UnitTable { wind_speed: us.wind_speed, ..ca },
            us,
            "ca must match us in every other entry"
        );
    }

    #[test]
    fn uk2_table_only_overrides_distances_and_wind_speed() {
        let si = UnitTable::si();
        let uk2 = UnitTable::uk2();
        assert_eq!(uk2.nearest_storm_distance, "mi");
        assert_eq!(uk2.visibility, "mi");
        assert_eq!(uk2.wind_speed, "mph");
        assert_eq!(
            UnitTable {
                nearest_storm_distance: si.nearest_storm_distance,
                visibility: si.visibility,
                wind_speed: si.wind_speed,
                ..uk2
            },
            si,
            "uk2 must match si in every other entry"
        );
    }

    #[test]
    fn every_system_resolves_to_a_table() {
        assert_eq!(UnitTable::for_system(UnitSystem::Us), UnitTable::us());
        assert_eq!(UnitTable::for_system(UnitSystem::Si), UnitTable::si());
        assert_eq!(UnitTable::for_system(UnitSystem::Ca), UnitTable::ca());
        assert_eq!(UnitTable::for_system(UnitSystem::Uk2), UnitTable::uk2());
        // auto has no table of its own and degrades to us
        assert_eq!(UnitTable::for_system(UnitSystem::Auto), UnitTable::us());
    }
}
