pub mod equity;
pub mod impact;
pub mod inputs;
pub mod metrics;
pub mod options;
pub mod risk;
pub mod timeline;
pub mod validation;

pub use equity::{calculate_equity_impact, EquityImpact};
pub use impact::{compute_enhanced_impact, compute_impact, logistic};
pub use inputs::InputVector;
pub use metrics::{
    calculate_digital_divide_reduction, calculate_engagement_time, calculate_secondary_metrics,
    SecondaryMetrics,
};
pub use options::{Coefficients, ImpactOptions};
pub use risk::{calculate_risk_assessment, RiskAssessment, RiskEntry, RiskLevel};
pub use timeline::{calculate_implementation_timeline, Phase, Timeline};
pub use validation::{validate_inputs, validate_options};
