//! Conversion from semantic lengths (meters) to drawing units.

use serde::{Deserialize, Serialize};

/// Physical drawing unit of the output canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Centimeters (the historical output unit).
    #[default]
    Cm,
    /// Millimeters.
    Mm,
}

impl Unit {
    /// Drawing units per meter.
    #[inline]
    pub fn per_meter(self) -> f64 {
        match self {
            Unit::Cm => 100.0,
            Unit::Mm => 1000.0,
        }
    }

    /// SVG length suffix for this unit.
    #[inline]
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Mm => "mm",
        }
    }
}

/// Single multiplicative meter-to-drawing-unit transform.
#[derive(Clone, Copy, Debug)]
pub struct UnitTransform {
    unit: Unit,
}

impl UnitTransform {
    pub fn new(unit: Unit) -> Self {
        Self { unit }
    }

    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Convert a length in meters to drawing units.
    #[inline]
    pub fn to_units(&self, meters: f64) -> f64 {
        meters * self.unit.per_meter()
    }
}
