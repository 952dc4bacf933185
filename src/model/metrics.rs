use serde::{Deserialize, Serialize};

use super::impact::round_half_up;

/// Population the secondary counts are projected from.
pub const BASE_POPULATION: f64 = 750_000.0;
/// Share of the base population that is student-age.
const STUDENT_SHARE: f64 = 0.08;
const SCHOOLS_AT_FULL_IMPACT: f64 = 800.0;
const TEACHERS_AT_FULL_IMPACT: f64 = 4500.0;

/// Derived head counts. Values are whole numbers kept as `f64` so that a NaN
/// score yields NaN counts instead of a silent zero.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryMetrics {
    pub students_equipped: f64,
    pub schools_improved: f64,
    pub teachers_trained: f64,
}

/// Score as a percentage-point reduction of the digital divide.
pub fn calculate_digital_divide_reduction(impact_score: f64) -> f64 {
    impact_score * 100.0
}

/// Weekly engagement hours, with a one hour baseline.
pub fn calculate_engagement_time(impact_score: f64) -> f64 {
    impact_score * 5.0 + 1.0
}

pub fn calculate_secondary_metrics(impact_score: f64) -> SecondaryMetrics {
    SecondaryMetrics {
        students_equipped: round_half_up(impact_score * BASE_POPULATION * STUDENT_SHARE),
        schools_improved: round_half_up(impact_score * SCHOOLS_AT_FULL_IMPACT),
        teachers_trained: round_half_up(impact_score * TEACHERS_AT_FULL_IMPACT),
    }
}
