use super::inputs::InputVector;
use super::options::{Coefficients, ImpactOptions};

/// Upper bound of the basic model (also its scale factor).
pub const BASIC_MAX: f64 = 0.6;
/// Upper bound of the enhanced model.
pub const ENHANCED_MAX: f64 = 0.99;
/// Exponent applied when diminishing returns are on.
pub const DIMINISHING_EXPONENT: f64 = 0.95;

/// `1 / (1 + e^-x)`
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Clamp from above. Unlike `f64::min`, a NaN value stays NaN.
pub(crate) fn cap(value: f64, max: f64) -> f64 {
    if value > max {
        max
    } else {
        value
    }
}

/// Clamp from below. Unlike `f64::max`, a NaN value stays NaN.
pub(crate) fn floor_at(value: f64, min: f64) -> f64 {
    if value < min {
        min
    } else {
        value
    }
}

/// Round half up, matching the usual "school" rounding for ties
/// (`2.5 -> 3`, `-2.5 -> -2`). NaN stays NaN.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Basic model: logistic of the weighted sum, scaled into `[0, 0.6]`.
pub fn compute_impact(inputs: &InputVector) -> f64 {
    let c = Coefficients::BASIC;
    let linear = c.alpha * inputs.budget
        + c.beta * inputs.internet
        + c.gamma * inputs.training
        + c.delta * inputs.community
        + c.intercept;

    // The scale already bounds the result; the cap is kept as the model's stated limit.
    cap(logistic(linear) * BASIC_MAX, BASIC_MAX)
}

/// Enhanced model with regional and socioeconomic adjustments, bounded to `[0, 0.99]`.
pub fn compute_enhanced_impact(inputs: &InputVector, options: &ImpactOptions) -> f64 {
    let c = Coefficients::ENHANCED;
    let regional = options.regional_multiplier();
    let socioeconomic = options.socioeconomic_multiplier();

    let linear = c.alpha * regional * inputs.budget
        + c.beta * regional * inputs.internet
        + c.gamma * inputs.training
        + c.delta * socioeconomic * inputs.community
        + c.intercept;

    let base = logistic(linear);
    let adjusted = if options.apply_diminishing_returns {
        base.powf(DIMINISHING_EXPONENT)
    } else {
        base
    };

    cap(adjusted, ENHANCED_MAX)
}
