use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a printable material. The catalog is keyed by this code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialCode {
    Pla,
    Abs,
    Petg,
    Tpu,
}

impl MaterialCode {
    pub const ALL: [MaterialCode; 4] = [
        MaterialCode::Pla,
        MaterialCode::Abs,
        MaterialCode::Petg,
        MaterialCode::Tpu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialCode::Pla => "PLA",
            MaterialCode::Abs => "ABS",
            MaterialCode::Petg => "PETG",
            MaterialCode::Tpu => "TPU",
        }
    }
}

impl fmt::Display for MaterialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialCode {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMaterial(s.to_string()))
    }
}

/// A material code that does not match any known material.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown material: {0}")]
pub struct UnknownMaterial(pub String);

/// Physical and commercial properties of one material.
///
/// Built once when the catalog is constructed and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// User-visible name, e.g. "PLA (Standard)".
    pub name: String,
    /// Density in grams per cubic centimeter.
    #[serde(rename = "density")]
    pub density_g_cm3: f64,
    /// Filament price in currency units per kilogram.
    pub price_per_kg: f64,
    /// Dimensionless speed factor; lower values print slower (e.g. flexible
    /// filament) and therefore cost more machine time.
    pub print_speed_modifier: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_strings() {
        for code in MaterialCode::ALL {
            let parsed: MaterialCode = code.as_str().parse().unwrap();
            assert_eq!(parsed, code);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("petg".parse::<MaterialCode>().unwrap(), MaterialCode::Petg);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "XYZ".parse::<MaterialCode>().unwrap_err();
        assert_eq!(err, UnknownMaterial("XYZ".to_string()));
    }

    #[test]
    fn code_serializes_uppercase() {
        let json = serde_json::to_string(&MaterialCode::Pla).unwrap();
        assert_eq!(json, "\"PLA\"");
    }
}
