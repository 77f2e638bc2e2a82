use serde::{Deserialize, Serialize};

use crate::material::MaterialCode;

/// Itemized costs for one quoted print. All values are in currency units,
/// rounded half-up to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Filament cost.
    pub material: f64,
    /// Machine occupancy cost.
    pub machine_time: f64,
    /// Fixed post-processing cost plus any support-removal surcharge.
    pub post_processing: f64,
    /// Exact sum of the three components above.
    pub subtotal: f64,
    /// `subtotal × margin_rate`.
    pub margin: f64,
    /// `subtotal + margin`, floored at the configured minimum price.
    pub total: f64,
}

/// Display form of the estimated print duration. The engine keeps the
/// fractional duration internally and rounds only here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintTime {
    /// Hours, rounded to 2 decimal places.
    pub hours: f64,
    /// Total minutes, rounded to the nearest whole minute.
    pub minutes: f64,
}

/// Material consumption for one quoted print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsage {
    #[serde(rename = "type")]
    pub code: MaterialCode,
    pub name: String,
    /// Deposited filament mass in grams.
    pub weight_g: f64,
    /// Filament cost (same value as `CostBreakdown::material`).
    pub cost: f64,
}

/// The print settings a quote was actually computed with. `includes_supports`
/// is the resolved boolean, never the deferred `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParameters {
    pub infill_percent: f64,
    pub layer_height_mm: f64,
    pub includes_supports: bool,
}

/// Complete pricing output for one analysis + parameter combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub material: MaterialUsage,
    pub print_time: PrintTime,
    pub costs: CostBreakdown,
    pub parameters: ResolvedParameters,
}
