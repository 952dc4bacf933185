use serde::{Deserialize, Serialize};

use crate::model::{ImpactOptions, InputVector};
use crate::report::ModelKind;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scoring model used for every scenario (default: enhanced)
    #[serde(default)]
    pub model: ModelKind,

    /// Reject scenarios with out-of-range inputs instead of scoring them
    #[serde(default)]
    pub strict: bool,

    /// Options applied to scenarios that don't set their own
    #[serde(default)]
    pub options: ImpactOptions,

    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub name: String,
    pub budget: f64,
    pub internet: f64,
    pub training: f64,
    pub community: f64,
    /// Replaces the file-level options for this scenario
    #[serde(default)]
    pub options: Option<ImpactOptions>,
}

impl ScenarioConfig {
    pub fn inputs(&self) -> InputVector {
        InputVector::new(self.budget, self.internet, self.training, self.community)
    }

    pub fn effective_options(&self, defaults: &ImpactOptions) -> ImpactOptions {
        self.options.unwrap_or(*defaults)
    }
}
