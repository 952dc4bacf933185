use serde::{Deserialize, Serialize};

/// Context flags for the enhanced model.
///
/// Example YAML:
/// ```yaml
/// options:
///   is_rural: true
///   socioeconomic_level: 0.8
///   apply_diminishing_returns: false
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ImpactOptions {
    /// Scale the budget and internet terms by 0.85 (default: false)
    pub is_rural: bool,

    /// Multiplier on the community term (default: 1.0).
    /// Zero or NaN is treated as unset.
    pub socioeconomic_level: f64,

    /// Raise the logistic output to 0.95 before clamping (default: true)
    pub apply_diminishing_returns: bool,
}

impl Default for ImpactOptions {
    fn default() -> Self {
        Self {
            is_rural: false,
            socioeconomic_level: 1.0,
            apply_diminishing_returns: true,
        }
    }
}

impl ImpactOptions {
    pub const RURAL_MULTIPLIER: f64 = 0.85;

    pub fn regional_multiplier(&self) -> f64 {
        if self.is_rural {
            Self::RURAL_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn socioeconomic_multiplier(&self) -> f64 {
        if self.socioeconomic_level == 0.0 || self.socioeconomic_level.is_nan() {
            1.0
        } else {
            self.socioeconomic_level
        }
    }
}

/// Weights of the linear term fed to the logistic transform:
/// `alpha*budget + beta*internet + gamma*training + delta*community + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub intercept: f64,
}

impl Coefficients {
    pub const BASIC: Coefficients = Coefficients {
        alpha: 0.0008,
        beta: 0.015,
        gamma: 0.6,
        delta: 0.35,
        intercept: -4.2,
    };

    pub const ENHANCED: Coefficients = Coefficients {
        alpha: 0.003,
        beta: 0.05,
        gamma: 1.2,
        delta: 0.8,
        intercept: -2.0,
    };
}
