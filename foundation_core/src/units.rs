//! # Unit Conversion
//!
//! Foundation inputs arrive in whatever units the site data uses. Three
//! families are supported, each expressed against one base unit:
//!
//! - Length: meters (m), centimeters (cm), millimeters (mm)
//! - Force: kilonewtons (kN), newtons (N), tonne-force (tf), kilogram-force (kgf)
//! - Pressure: kilopascals (kPa), megapascals (MPa), pascals (Pa), kgf/cm²
//!
//! Converting between families (e.g. m to kN) is an input error and is
//! reported as [`CalcError::UnsupportedConversion`].
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::units::convert_units;
//!
//! assert_eq!(convert_units(100.0, "cm", "m").unwrap(), 1.0);
//! assert_eq!(convert_units(1.0, "MPa", "kPa").unwrap(), 1000.0);
//! assert!(convert_units(1.0, "m", "kN").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard gravity (m/s²), used for the gravitational force units.
pub const STANDARD_GRAVITY: f64 = 9.80665;

// ============================================================================
// Conversion Tables (factor = base units per unit)
// ============================================================================

const LENGTH_UNITS: [(&str, f64); 3] = [
    ("m", 1.0),
    ("cm", 0.01),
    ("mm", 0.001),
];

const FORCE_UNITS: [(&str, f64); 4] = [
    ("kN", 1.0),
    ("N", 0.001),
    ("tf", STANDARD_GRAVITY),
    ("kgf", STANDARD_GRAVITY / 1000.0),
];

const PRESSURE_UNITS: [(&str, f64); 4] = [
    ("kPa", 1.0),
    ("MPa", 1000.0),
    ("Pa", 0.001),
    ("kgf/cm²", STANDARD_GRAVITY * 10.0),
];

/// ASCII spellings accepted in place of a canonical symbol.
const ALIASES: [(&str, &str); 1] = [("kgf/cm2", "kgf/cm²")];

fn canonical(symbol: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == symbol)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(symbol)
}

// ============================================================================
// Unit Families
// ============================================================================

/// A group of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitFamily {
    Length,
    Force,
    Pressure,
}

impl UnitFamily {
    /// All families, in lookup order
    pub const ALL: [UnitFamily; 3] = [UnitFamily::Length, UnitFamily::Force, UnitFamily::Pressure];

    /// Symbol and factor for every unit in the family.
    pub fn units(&self) -> &'static [(&'static str, f64)] {
        match self {
            UnitFamily::Length => &LENGTH_UNITS,
            UnitFamily::Force => &FORCE_UNITS,
            UnitFamily::Pressure => &PRESSURE_UNITS,
        }
    }

    /// The unit every factor in this family is relative to
    pub fn base_unit(&self) -> &'static str {
        match self {
            UnitFamily::Length => "m",
            UnitFamily::Force => "kN",
            UnitFamily::Pressure => "kPa",
        }
    }

    /// Base units per one `symbol`, if the symbol belongs to this family.
    pub fn factor(&self, symbol: &str) -> Option<f64> {
        let symbol = canonical(symbol);
        self.units()
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.factor(symbol).is_some()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitFamily::Length => "length",
            UnitFamily::Force => "force",
            UnitFamily::Pressure => "pressure",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Find the family a unit symbol belongs to.
pub fn family_of(symbol: &str) -> Option<UnitFamily> {
    UnitFamily::ALL.into_iter().find(|family| family.contains(symbol))
}

/// Every canonical unit symbol, grouped by family in lookup order.
pub fn supported_units() -> Vec<&'static str> {
    UnitFamily::ALL
        .iter()
        .flat_map(|family| family.units().iter().map(|(symbol, _)| *symbol))
        .collect()
}

/// Convert `value` from one unit to another within the same family.
///
/// Families are tried in the order length, force, pressure; the first one
/// containing both units is used.
///
/// # Errors
///
/// [`CalcError::UnsupportedConversion`] when the units are in different
/// families or either one is unknown.
pub fn convert_units(value: f64, from_unit: &str, to_unit: &str) -> CalcResult<f64> {
    UnitFamily::ALL
        .iter()
        .find_map(|family| Some((family.factor(from_unit)?, family.factor(to_unit)?)))
        .map(|(from_factor, to_factor)| value * from_factor / to_factor)
        .ok_or_else(|| CalcError::unsupported_conversion(from_unit, to_unit))
}
