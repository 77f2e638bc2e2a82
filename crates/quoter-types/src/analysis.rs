use serde::{Deserialize, Serialize};

/// Bounding-box extents in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Dimensions {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Geometric summary of an uploaded model, produced once per file and
/// read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Estimated solid volume in cm³. Always positive.
    pub volume_cm3: f64,
    /// Estimated surface area in cm². Non-negative.
    pub surface_area_cm2: f64,
    /// Bounding-box dimensions in cm.
    pub dimensions_cm: Dimensions,
    /// Heuristic shape complexity in 0.0..=1.0.
    pub complexity_factor: f64,
    /// Whether the mesh is assumed to enclose a solid volume.
    pub is_watertight: bool,
    /// Whether the part is expected to require support structures.
    pub needs_supports: bool,
}
