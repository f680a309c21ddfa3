//! EIC object types
//!
//! The third character of a code tells which kind of object it identifies.
//! See the ENTSO-E EIC Reference Manual, release 5, pp. 14-16.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EicError;

/// Object type encoded by the type discriminator (third character)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EicType {
    /// `X` - market participant
    Party,
    /// `Y` - bidding zone, control area, etc.
    Area,
    /// `Z` - metering point
    MeasurementPoint,
    /// `V` - location
    Location,
    /// `W` - production or consumption unit
    Resource,
    /// `T` - interconnector
    TieLine,
    /// `A` - substation
    Substation,
}

impl EicType {
    /// All types, in registry order
    pub const ALL: [EicType; 7] = [
        EicType::Party,
        EicType::Area,
        EicType::MeasurementPoint,
        EicType::Location,
        EicType::Resource,
        EicType::TieLine,
        EicType::Substation,
    ];

    /// Lowercase discriminator letter
    pub const fn discriminator(self) -> char {
        match self {
            EicType::Party => 'x',
            EicType::Area => 'y',
            EicType::MeasurementPoint => 'z',
            EicType::Location => 'v',
            EicType::Resource => 'w',
            EicType::TieLine => 't',
            EicType::Substation => 'a',
        }
    }

    /// Look up a discriminator letter (case-insensitive)
    pub fn from_discriminator(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.discriminator() == c)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EicType::Party => "PARTY",
            EicType::Area => "AREA",
            EicType::MeasurementPoint => "MEASUREMENT_POINT",
            EicType::Location => "LOCATION",
            EicType::Resource => "RESOURCE",
            EicType::TieLine => "TIE_LINE",
            EicType::Substation => "SUBSTATION",
        }
    }
}

impl fmt::Display for EicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EicType {
    type Err = EicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EicError::invalid_format(format!("Unknown EIC type: '{}'", s)))
    }
}
