//! Coarse geometric analysis of an uploaded model.
//!
//! There is no real mesh library behind this: volume and surface come from
//! the bounding box, and the support heuristics are placeholder policy.
//! Everything downstream consumes only [`AnalysisResult`], so a genuine
//! mesh analysis can replace this module without touching the pricer.

use tracing::{debug, instrument};

use quoter_types::{AnalysisResult, Dimensions};

use crate::config::EstimatorConfig;

/// Filename fragments that suggest overhang-heavy geometry.
const OVERHANG_KEYWORDS: [&str; 3] = ["overhang", "bridge", "cantilever"];

/// Errors from the estimator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid dimensions {x} x {y} x {z} cm: every extent must be positive and finite")]
    InvalidDimensions { x: f64, y: f64, z: f64 },
}

/// The raw shape signals the estimator works from.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSignal {
    /// Bounding-box extents in cm.
    pub dimensions_cm: Dimensions,
    /// Heuristic complexity in 0.0..=1.0; out-of-range values are clamped.
    pub complexity_factor: f64,
    /// Result of an external integrity check, when one ran. `None` assumes
    /// a watertight mesh.
    pub watertight_hint: Option<bool>,
}

impl ShapeSignal {
    /// Guess shape signals from nothing but the upload's name and size.
    ///
    /// Larger files tend to be larger or more detailed models, so the byte
    /// length drives both a bounding-box guess (slightly rectangular, near
    /// 10 cm³ of box per 100 KiB-ish of file) and the complexity factor
    /// (saturating at 1 MB). Filenames that advertise overhangs bump
    /// complexity so the support heuristic triggers.
    pub fn from_upload(filename: &str, byte_len: u64) -> Self {
        let box_volume_guess = (byte_len as f64 / 100_000.0 * 10.0).max(1.0);
        let side = box_volume_guess.cbrt();
        let dimensions_cm = Dimensions::new(
            round_dp(side * 1.2, 2),
            round_dp(side * 0.8, 2),
            round_dp(side, 2),
        );

        let mut complexity_factor = (byte_len as f64 / 1_000_000.0).min(1.0);
        let lower = filename.to_ascii_lowercase();
        if OVERHANG_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            complexity_factor = complexity_factor.max(0.8);
        }

        Self {
            dimensions_cm,
            complexity_factor: round_dp(complexity_factor, 3),
            watertight_hint: None,
        }
    }
}

/// Derive an [`AnalysisResult`] from coarse shape signals.
///
/// Deterministic: identical signals and config always produce the same
/// result. Non-positive or non-finite extents abort with
/// [`GeometryError::InvalidDimensions`] and no partial result.
#[instrument(skip(config), fields(dims = ?signal.dimensions_cm))]
pub fn estimate(
    signal: &ShapeSignal,
    config: &EstimatorConfig,
) -> Result<AnalysisResult, GeometryError> {
    let Dimensions { x, y, z } = signal.dimensions_cm;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) || x <= 0.0 || y <= 0.0 || z <= 0.0 {
        return Err(GeometryError::InvalidDimensions { x, y, z });
    }

    let complexity = signal.complexity_factor.clamp(0.0, 1.0);

    let bbox_volume = x * y * z;
    // Floor at one cubic millimeter so rounding can never report an empty part.
    let volume_cm3 = round_dp(bbox_volume * config.fill_ratio, 3).max(0.001);

    let bbox_surface = 2.0 * (x * y + y * z + x * z);
    let surface_area_cm2 = round_dp(
        bbox_surface * (1.0 + complexity * config.surface_complexity_weight),
        2,
    );

    let needs_supports = x.max(y) > z * config.support_overhang_ratio
        || complexity > config.support_complexity_threshold;

    let result = AnalysisResult {
        volume_cm3,
        surface_area_cm2,
        dimensions_cm: signal.dimensions_cm,
        complexity_factor: complexity,
        is_watertight: signal.watertight_hint.unwrap_or(true),
        needs_supports,
    };
    debug!(
        volume_cm3,
        surface_area_cm2, needs_supports, "estimated geometry"
    );
    Ok(result)
}

fn round_dp(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(x: f64, y: f64, z: f64, complexity: f64) -> ShapeSignal {
        ShapeSignal {
            dimensions_cm: Dimensions::new(x, y, z),
            complexity_factor: complexity,
            watertight_hint: None,
        }
    }

    #[test]
    fn volume_is_bbox_volume_times_fill_ratio() {
        let config = EstimatorConfig::default();
        let result = estimate(&signal(2.0, 3.0, 4.0, 0.0), &config).unwrap();
        // 24 cm³ of box at the default 0.4 fill ratio.
        assert_eq!(result.volume_cm3, 9.6);
    }

    #[test]
    fn surface_scales_with_complexity() {
        let config = EstimatorConfig::default();
        let plain = estimate(&signal(2.0, 3.0, 4.0, 0.0), &config).unwrap();
        let busy = estimate(&signal(2.0, 3.0, 4.0, 1.0), &config).unwrap();
        assert_eq!(plain.surface_area_cm2, 2.0 * (6.0 + 12.0 + 8.0));
        assert!(busy.surface_area_cm2 > plain.surface_area_cm2);
    }

    #[test]
    fn zero_or_negative_dimensions_are_rejected() {
        let config = EstimatorConfig::default();
        for dims in [(0.0, 3.0, 4.0), (2.0, -1.0, 4.0), (2.0, 3.0, 0.0)] {
            let err = estimate(&signal(dims.0, dims.1, dims.2, 0.0), &config).unwrap_err();
            assert!(matches!(err, GeometryError::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn nan_dimension_is_rejected() {
        let config = EstimatorConfig::default();
        let err = estimate(&signal(f64::NAN, 3.0, 4.0, 0.0), &config).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidDimensions { .. }));
    }

    #[test]
    fn wide_flat_part_needs_supports() {
        let config = EstimatorConfig::default();
        // 10 cm wide, 2 cm tall: past the 2:1 overhang ratio.
        let result = estimate(&signal(10.0, 3.0, 2.0, 0.0), &config).unwrap();
        assert!(result.needs_supports);
    }

    #[test]
    fn complex_part_needs_supports() {
        let config = EstimatorConfig::default();
        let result = estimate(&signal(2.0, 2.0, 4.0, 0.9), &config).unwrap();
        assert!(result.needs_supports);
    }

    #[test]
    fn simple_tall_part_does_not_need_supports() {
        let config = EstimatorConfig::default();
        let result = estimate(&signal(2.0, 2.0, 4.0, 0.1), &config).unwrap();
        assert!(!result.needs_supports);
    }

    #[test]
    fn watertight_defaults_true_and_respects_hint() {
        let config = EstimatorConfig::default();
        let mut s = signal(2.0, 2.0, 2.0, 0.0);
        assert!(estimate(&s, &config).unwrap().is_watertight);
        s.watertight_hint = Some(false);
        assert!(!estimate(&s, &config).unwrap().is_watertight);
    }

    #[test]
    fn out_of_range_complexity_is_clamped() {
        let config = EstimatorConfig::default();
        let result = estimate(&signal(2.0, 2.0, 2.0, 3.5), &config).unwrap();
        assert_eq!(result.complexity_factor, 1.0);
    }

    #[test]
    fn sub_millimeter_parts_report_a_nonzero_volume() {
        let config = EstimatorConfig::default();
        let result = estimate(&signal(0.05, 0.05, 0.05, 0.0), &config).unwrap();
        assert_eq!(result.volume_cm3, 0.001);
    }

    #[test]
    fn upload_heuristic_grows_with_file_size() {
        let small = ShapeSignal::from_upload("part.stl", 50_000);
        let large = ShapeSignal::from_upload("part.stl", 5_000_000);
        assert!(large.dimensions_cm.x > small.dimensions_cm.x);
        assert!(large.complexity_factor > small.complexity_factor);
        assert!(large.complexity_factor <= 1.0);
    }

    #[test]
    fn upload_heuristic_floors_tiny_files() {
        let tiny = ShapeSignal::from_upload("pin.stl", 10);
        assert!(tiny.dimensions_cm.z >= 1.0);
    }

    #[test]
    fn overhang_keyword_bumps_complexity() {
        let plain = ShapeSignal::from_upload("bracket.stl", 50_000);
        let flagged = ShapeSignal::from_upload("bridge_test.stl", 50_000);
        assert!(flagged.complexity_factor > plain.complexity_factor);
        assert!(flagged.complexity_factor >= 0.8);
    }
}
