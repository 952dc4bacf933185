use std::fmt;

use serde::Serialize;

use super::impact::floor_at;
use super::inputs::InputVector;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `High` below `high_below`, `Medium` below `medium_below`, else `Low`.
    /// A NaN value compares false on both and lands on `Low`.
    fn classify(value: f64, high_below: f64, medium_below: f64) -> Self {
        if value < high_below {
            RiskLevel::High
        } else if value < medium_below {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed wording for one risk category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskProfile {
    pub label: &'static str,
    pub impact: &'static str,
    pub mitigation: &'static str,
}

pub const FUNDING: RiskProfile = RiskProfile {
    label: "funding",
    impact: "High - Could delay or cancel implementation",
    mitigation: "Secure multiple funding sources, phase implementation",
};

pub const TECHNICAL: RiskProfile = RiskProfile {
    label: "technical",
    impact: "Medium - May reduce effectiveness",
    mitigation: "Invest in mobile solutions, partner with ISPs",
};

pub const CAPACITY: RiskProfile = RiskProfile {
    label: "capacity",
    impact: "High - Poor adoption and outcomes",
    mitigation: "Comprehensive training programs, ongoing support",
};

pub const ADOPTION: RiskProfile = RiskProfile {
    label: "adoption",
    impact: "Medium - Slower rollout and engagement",
    mitigation: "Community champions, parent education programs",
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RiskEntry {
    pub level: RiskLevel,
    pub probability: f64,
    pub impact: &'static str,
    pub mitigation: &'static str,
}

impl RiskEntry {
    fn new(profile: &RiskProfile, level: RiskLevel, probability: f64) -> Self {
        Self {
            level,
            probability,
            impact: profile.impact,
            mitigation: profile.mitigation,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RiskAssessment {
    pub funding: RiskEntry,
    pub technical: RiskEntry,
    pub capacity: RiskEntry,
    pub adoption: RiskEntry,
}

impl RiskAssessment {
    /// Entries in fixed order, paired with their category label.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &RiskEntry)> {
        [
            (FUNDING.label, &self.funding),
            (TECHNICAL.label, &self.technical),
            (CAPACITY.label, &self.capacity),
            (ADOPTION.label, &self.adoption),
        ]
        .into_iter()
    }

    pub fn highest_level(&self) -> RiskLevel {
        self.iter()
            .map(|(_, entry)| entry.level)
            .max()
            .unwrap_or(RiskLevel::Low)
    }
}

pub fn calculate_risk_assessment(inputs: &InputVector) -> RiskAssessment {
    let InputVector {
        budget,
        internet,
        training,
        community,
    } = *inputs;

    RiskAssessment {
        funding: RiskEntry::new(
            &FUNDING,
            RiskLevel::classify(budget, 1500.0, 3000.0),
            floor_at(0.8 - budget / 5000.0, 0.1),
        ),
        technical: RiskEntry::new(
            &TECHNICAL,
            RiskLevel::classify(internet, 70.0, 85.0),
            floor_at(0.9 - internet / 100.0, 0.15),
        ),
        capacity: RiskEntry::new(
            &CAPACITY,
            RiskLevel::classify(training, 0.4, 0.7),
            floor_at(1.0 - training, 0.2),
        ),
        adoption: RiskEntry::new(
            &ADOPTION,
            RiskLevel::classify(community, 0.3, 0.6),
            floor_at(1.0 - community, 0.25),
        ),
    }
}
