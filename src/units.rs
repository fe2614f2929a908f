use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Mass unit used both for reported carbon estimates and for shipment weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    /// Grams.
    G,
    /// Pounds.
    Lb,
    /// Kilograms.
    #[default]
    Kg,
    /// Metric tons.
    Mt,
}

impl MassUnit {
    pub const ALL: [MassUnit; 4] = [MassUnit::G, MassUnit::Lb, MassUnit::Kg, MassUnit::Mt];

    pub fn as_str(self) -> &'static str {
        match self {
            MassUnit::G => "g",
            MassUnit::Lb => "lb",
            MassUnit::Kg => "kg",
            MassUnit::Mt => "mt",
        }
    }

    /// Key under `data.attributes` that holds an estimate in this unit.
    pub fn attribute_key(self) -> &'static str {
        match self {
            MassUnit::G => "carbon_g",
            MassUnit::Lb => "carbon_lb",
            MassUnit::Kg => "carbon_kg",
            MassUnit::Mt => "carbon_mt",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MassUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" => Ok(MassUnit::G),
            "lb" => Ok(MassUnit::Lb),
            "kg" => Ok(MassUnit::Kg),
            "mt" => Ok(MassUnit::Mt),
            other => Err(Error::config(format!(
                "unknown mass unit {other:?} (expected one of: g, lb, kg, mt)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectricityUnit {
    #[default]
    Mwh,
    Kwh,
}

/// Countries the electricity estimate supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    #[default]
    Us,
    Ca,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    /// Miles.
    Mi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMethod {
    #[default]
    Truck,
    Ship,
    Train,
    Plane,
}

/// Cabin class of a flight leg. The service assumes economy when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    #[default]
    Economy,
    Premium,
}
