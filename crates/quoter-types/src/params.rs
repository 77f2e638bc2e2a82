use serde::{Deserialize, Serialize};

use crate::material::MaterialCode;

/// User-selected print settings for one pricing request.
///
/// Immutable once constructed; range checks happen when the pricing engine
/// consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintParameters {
    /// Material to quote for.
    pub material: MaterialCode,
    /// Interior fill percentage. Valid range is (0, 100].
    pub infill_percent: f64,
    /// Layer height in millimeters. Must be positive.
    pub layer_height_mm: f64,
    /// Whether support structures are printed. `None` defers to the
    /// analysis' own `needs_supports` heuristic.
    #[serde(default)]
    pub include_supports: Option<bool>,
}

impl PrintParameters {
    /// Parameters matching the upload form defaults.
    pub fn defaults_for(material: MaterialCode) -> Self {
        Self {
            material,
            infill_percent: 20.0,
            layer_height_mm: 0.2,
            include_supports: None,
        }
    }
}
