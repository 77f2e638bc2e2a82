//! Tunable business configuration for the estimator and the pricing engine.

use serde::{Deserialize, Serialize};

/// Rates and constants the pricing computation runs on.
///
/// Everything here is business configuration, not physics: the defaults are
/// the shop's current rates and are expected to drift over time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Machine occupancy rate in currency units per hour.
    pub machine_rate_per_hour: f64,
    /// Flat post-processing cost applied to every print.
    pub post_processing_base: f64,
    /// Support-removal surcharge as a fraction of the material cost,
    /// added to post-processing when supports are printed.
    pub support_surcharge_rate: f64,
    /// Markup applied on the cost subtotal.
    pub margin_rate: f64,
    /// Floor for the quoted total.
    pub minimum_price: f64,
    /// Print time per cm³ at 100 % infill and the reference layer height.
    pub base_minutes_per_cm3: f64,
    /// Layer height the baseline above was calibrated at.
    pub reference_layer_height_mm: f64,
    /// Share of print time that scales with infill; the remainder is
    /// perimeter and travel time independent of fill density.
    pub infill_time_weight: f64,
    /// How strongly shape complexity stretches print time
    /// (`1 + complexity × weight`).
    pub complexity_time_weight: f64,
    /// Print-time penalty when supports are generated.
    pub support_time_multiplier: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            machine_rate_per_hour: 15.0,
            post_processing_base: 5.0,
            support_surcharge_rate: 0.3,
            margin_rate: 0.25,
            minimum_price: 5.0,
            base_minutes_per_cm3: 2.0,
            reference_layer_height_mm: 0.2,
            infill_time_weight: 0.5,
            complexity_time_weight: 0.5,
            support_time_multiplier: 1.15,
        }
    }
}

/// Constants behind the coarse geometric estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Assumed solid fraction of the bounding box. Real parts rarely fill
    /// their box; 0.3–0.5 is typical.
    pub fill_ratio: f64,
    /// How strongly complexity inflates the bounding-box surface area
    /// (`1 + complexity × weight`).
    pub surface_complexity_weight: f64,
    /// A horizontal extent more than this many times the height flags the
    /// part as needing supports.
    pub support_overhang_ratio: f64,
    /// Complexity above this threshold flags the part as needing supports.
    pub support_complexity_threshold: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            fill_ratio: 0.4,
            surface_complexity_weight: 0.5,
            support_overhang_ratio: 2.0,
            support_complexity_threshold: 0.3,
        }
    }
}
