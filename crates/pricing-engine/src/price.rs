//! The pricing computation: (material, analysis, parameters, config) into an
//! itemized cost breakdown and time estimate.

use tracing::{debug, instrument};

use quoter_types::{
    AnalysisResult, CostBreakdown, Material, MaterialUsage, Pricing, PrintParameters, PrintTime,
    ResolvedParameters,
};

use crate::config::PricingConfig;

/// Errors from parameter validation. Unknown material codes never reach the
/// pricer; the catalog lookup fails first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("infill must be in (0, 100] percent, got {0}")]
    InvalidInfill(f64),

    #[error("layer height must be positive, got {0} mm")]
    InvalidLayerHeight(f64),
}

/// Price one print.
///
/// Pure and deterministic: no I/O, no hidden state, identical inputs always
/// produce an identical [`Pricing`]. Monetary outputs are rounded half-up to
/// 2 decimals; the subtotal is the exact sum of the rounded components, so
/// the breakdown always adds up as displayed.
#[instrument(skip(material, analysis, config), fields(material = %params.material))]
pub fn compute_price(
    material: &Material,
    analysis: &AnalysisResult,
    params: &PrintParameters,
    config: &PricingConfig,
) -> Result<Pricing, PricingError> {
    // NaN fails both comparisons and lands here too.
    if !(params.infill_percent > 0.0 && params.infill_percent <= 100.0) {
        return Err(PricingError::InvalidInfill(params.infill_percent));
    }
    if !(params.layer_height_mm > 0.0) {
        return Err(PricingError::InvalidLayerHeight(params.layer_height_mm));
    }

    let includes_supports = params
        .include_supports
        .unwrap_or(analysis.needs_supports);
    let infill_fraction = params.infill_percent / 100.0;

    // Material: only the infilled share of the volume is deposited.
    let weight_g = analysis.volume_cm3 * material.density_g_cm3 * infill_fraction;
    let material_cost = round2(weight_g / 1000.0 * material.price_per_kg);

    // Machine time. The baseline is calibrated at 100 % infill and the
    // reference layer height; thinner layers and denser fill stretch it,
    // faster materials shrink it.
    let layer_factor = config.reference_layer_height_mm / params.layer_height_mm;
    let infill_factor =
        1.0 - config.infill_time_weight + config.infill_time_weight * infill_fraction;
    let complexity_factor = 1.0 + analysis.complexity_factor * config.complexity_time_weight;
    let mut print_minutes = config.base_minutes_per_cm3
        * analysis.volume_cm3
        * layer_factor
        * infill_factor
        * complexity_factor
        / material.print_speed_modifier;
    if includes_supports {
        print_minutes *= config.support_time_multiplier;
    }
    let print_hours = print_minutes / 60.0;
    let machine_cost = round2(print_hours * config.machine_rate_per_hour);

    let support_surcharge = if includes_supports {
        material_cost * config.support_surcharge_rate
    } else {
        0.0
    };
    let post_processing = round2(config.post_processing_base + support_surcharge);

    let subtotal = round2(material_cost + machine_cost + post_processing);
    let margin = round2(subtotal * config.margin_rate);
    let total = round2((subtotal + margin).max(config.minimum_price));

    debug!(
        weight_g,
        print_minutes, subtotal, total, includes_supports, "priced print"
    );

    Ok(Pricing {
        material: MaterialUsage {
            code: params.material,
            name: material.name.clone(),
            weight_g: round2(weight_g),
            cost: material_cost,
        },
        print_time: PrintTime {
            hours: round2(print_hours),
            minutes: print_minutes.round(),
        },
        costs: CostBreakdown {
            material: material_cost,
            machine_time: machine_cost,
            post_processing,
            subtotal,
            margin,
            total,
        },
        parameters: ResolvedParameters {
            infill_percent: params.infill_percent,
            layer_height_mm: params.layer_height_mm,
            includes_supports,
        },
    })
}

/// Round half-up to 2 decimal places of currency.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
