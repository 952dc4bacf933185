use serde::Serialize;

use super::impact::{floor_at, round_half_up};
use super::inputs::InputVector;

/// Fixed description of one rollout phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTemplate {
    pub name: &'static str,
    pub activities: &'static [&'static str],
}

pub const INFRASTRUCTURE_PHASE: PhaseTemplate = PhaseTemplate {
    name: "Infrastructure & Planning",
    activities: &["Hardware procurement", "Network setup", "Policy framework"],
};

pub const TRAINING_PHASE: PhaseTemplate = PhaseTemplate {
    name: "Teacher Training & Capacity Building",
    activities: &[
        "Professional development",
        "Curriculum integration",
        "Peer support networks",
    ],
};

pub const ROLLOUT_PHASE: PhaseTemplate = PhaseTemplate {
    name: "Community Engagement & Rollout",
    activities: &["Parent education", "Student onboarding", "Support systems"],
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Phase {
    pub name: &'static str,
    /// Rounded phase length (months)
    pub duration: f64,
    pub activities: &'static [&'static str],
}

impl Phase {
    fn from_template(template: &PhaseTemplate, time: f64) -> Self {
        Self {
            name: template.name,
            duration: round_half_up(time),
            activities: template.activities,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub phase1: Phase,
    pub phase2: Phase,
    pub phase3: Phase,
    /// Rounded sum of the unrounded phase times. Can differ from the sum of
    /// the phase durations by up to 2.
    pub total_duration: f64,
}

impl Timeline {
    pub fn phases(&self) -> [&Phase; 3] {
        [&self.phase1, &self.phase2, &self.phase3]
    }
}

/// Phase lengths shrink with budget, training and community engagement,
/// each down to a fixed minimum. Internet coverage does not affect the timeline.
pub fn calculate_implementation_timeline(inputs: &InputVector) -> Timeline {
    let infrastructure_time = floor_at(24.0 - inputs.budget / 200.0, 6.0);
    let training_time = floor_at(18.0 - inputs.training * 15.0, 3.0);
    let rollout_time = floor_at(12.0 - inputs.community * 10.0, 2.0);

    Timeline {
        phase1: Phase::from_template(&INFRASTRUCTURE_PHASE, infrastructure_time),
        phase2: Phase::from_template(&TRAINING_PHASE, training_time),
        phase3: Phase::from_template(&ROLLOUT_PHASE, rollout_time),
        total_duration: round_half_up(infrastructure_time + training_time + rollout_time),
    }
}
