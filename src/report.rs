use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::model::{
    calculate_digital_divide_reduction, calculate_engagement_time, calculate_equity_impact,
    calculate_implementation_timeline, calculate_risk_assessment, calculate_secondary_metrics,
    compute_enhanced_impact, compute_impact, EquityImpact, ImpactOptions, InputVector,
    RiskAssessment, SecondaryMetrics, Timeline, validate_inputs, validate_options,
};

/// Which scoring model produces the impact score.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Logistic score scaled into 0-0.6
    Basic,
    /// Regional and socioeconomic adjustments, bounded to 0-0.99
    #[default]
    Enhanced,
}

impl ModelKind {
    pub fn score(&self, inputs: &InputVector, options: &ImpactOptions) -> f64 {
        match self {
            ModelKind::Basic => compute_impact(inputs),
            ModelKind::Enhanced => compute_enhanced_impact(inputs, options),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Basic => "basic",
            ModelKind::Enhanced => "enhanced",
        }
    }
}

/// One scenario run through every formula.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    pub name: String,
    pub model: ModelKind,
    pub inputs: InputVector,
    pub options: ImpactOptions,
    pub impact_score: f64,
    pub digital_divide_reduction: f64,
    pub engagement_time: f64,
    pub secondary_metrics: SecondaryMetrics,
    pub timeline: Timeline,
    pub risks: RiskAssessment,
    pub equity: EquityImpact,
    pub generated_at: DateTime<Utc>,
}

impl ImpactReport {
    pub fn build(
        name: impl Into<String>,
        inputs: InputVector,
        model: ModelKind,
        options: ImpactOptions,
    ) -> Self {
        let name = name.into();
        let impact_score = model.score(&inputs, &options);
        tracing::debug!(
            scenario = %name,
            model = model.as_str(),
            impact_score,
            "evaluated scenario"
        );

        Self {
            model,
            inputs,
            options,
            impact_score,
            digital_divide_reduction: calculate_digital_divide_reduction(impact_score),
            engagement_time: calculate_engagement_time(impact_score),
            secondary_metrics: calculate_secondary_metrics(impact_score),
            timeline: calculate_implementation_timeline(&inputs),
            risks: calculate_risk_assessment(&inputs),
            equity: calculate_equity_impact(impact_score),
            generated_at: Utc::now(),
            name,
        }
    }
}

/// Order two values with NaN placed after every number.
fn cmp_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

/// Sort by impact score descending, then shorter total duration first.
/// NaN scores and durations rank after all finite ones. The sort is stable,
/// so remaining ties keep their input order.
pub fn rank_reports(reports: &mut [ImpactReport]) {
    reports.sort_by(|a, b| {
        let score_cmp = match (a.impact_score.is_nan(), b.impact_score.is_nan()) {
            (false, false) => b.impact_score.total_cmp(&a.impact_score),
            _ => cmp_nan_last(a.impact_score, b.impact_score),
        };
        score_cmp.then_with(|| {
            cmp_nan_last(a.timeline.total_duration, b.timeline.total_duration)
        })
    });
}

/// Check one scenario against the strict contract.
/// Every problem is reported, prefixed with the scenario name.
pub fn validate_scenario(
    name: &str,
    inputs: &InputVector,
    options: &ImpactOptions,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_inputs(inputs) {
        errors.extend(e);
    }
    if let Err(e) = validate_options(options) {
        errors.extend(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors
            .into_iter()
            .map(|e| format!("{}: {}", name, e))
            .collect())
    }
}

/// Build a report for every configured scenario and rank them.
///
/// With `strict`, all scenarios are validated first and any error aborts the
/// whole run; errors from every scenario are returned together.
pub fn evaluate_scenarios(config: &Config, strict: bool) -> Result<Vec<ImpactReport>, Vec<String>> {
    if strict {
        let errors: Vec<String> = config
            .scenarios
            .iter()
            .filter_map(|scenario| {
                validate_scenario(
                    &scenario.name,
                    &scenario.inputs(),
                    &scenario.effective_options(&config.options),
                )
                .err()
            })
            .flatten()
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }
    }

    let mut reports: Vec<ImpactReport> = config
        .scenarios
        .iter()
        .map(|scenario| {
            ImpactReport::build(
                scenario.name.clone(),
                scenario.inputs(),
                config.model,
                scenario.effective_options(&config.options),
            )
        })
        .collect();
    rank_reports(&mut reports);
    Ok(reports)
}
