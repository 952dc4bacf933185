use serde::Serialize;

// Relative reach of the program for each group, as a multiple of the overall score.
const MALE: f64 = 0.98;
const FEMALE: f64 = 1.02;
const NON_BINARY: f64 = 0.95;
const WITH_DISABILITY: f64 = 0.85;
const WITHOUT_DISABILITY: f64 = 1.0;
const NATIVE_SPEAKERS: f64 = 1.0;
const ESL: f64 = 0.78;
const MULTILINGUAL: f64 = 1.05;
const URBAN: f64 = 1.1;
const SUBURBAN: f64 = 1.0;
const RURAL: f64 = 0.75;
const REMOTE: f64 = 0.55;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenderImpact {
    pub male: f64,
    pub female: f64,
    pub non_binary: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisabilityImpact {
    pub with_disability: f64,
    pub without_disability: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageImpact {
    pub native_speakers: f64,
    pub esl: f64,
    pub multilingual: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GeographicImpact {
    pub urban: f64,
    pub suburban: f64,
    pub rural: f64,
    pub remote: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct EquityImpact {
    pub gender: GenderImpact,
    pub disability: DisabilityImpact,
    pub language: LanguageImpact,
    pub geographic: GeographicImpact,
}

impl EquityImpact {
    /// Widest gap between two groups of the same dimension. NaN if any group is NaN.
    pub fn max_gap(&self) -> f64 {
        let spread = |values: &[f64]| {
            if values.iter().any(|v| v.is_nan()) {
                return f64::NAN;
            }
            let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
            hi - lo
        };
        [
            spread(&[self.gender.male, self.gender.female, self.gender.non_binary]),
            spread(&[
                self.disability.with_disability,
                self.disability.without_disability,
            ]),
            spread(&[
                self.language.native_speakers,
                self.language.esl,
                self.language.multilingual,
            ]),
            spread(&[
                self.geographic.urban,
                self.geographic.suburban,
                self.geographic.rural,
                self.geographic.remote,
            ]),
        ]
        .into_iter()
        .fold(0.0, |gap: f64, s| if gap.is_nan() || s.is_nan() { f64::NAN } else { gap.max(s) })
    }
}

pub fn calculate_equity_impact(impact_score: f64) -> EquityImpact {
    EquityImpact {
        gender: GenderImpact {
            male: impact_score * MALE,
            female: impact_score * FEMALE,
            non_binary: impact_score * NON_BINARY,
        },
        disability: DisabilityImpact {
            with_disability: impact_score * WITH_DISABILITY,
            without_disability: impact_score * WITHOUT_DISABILITY,
        },
        language: LanguageImpact {
            native_speakers: impact_score * NATIVE_SPEAKERS,
            esl: impact_score * ESL,
            multilingual: impact_score * MULTILINGUAL,
        },
        geographic: GeographicImpact {
            urban: impact_score * URBAN,
            suburban: impact_score * SUBURBAN,
            rural: impact_score * RURAL,
            remote: impact_score * REMOTE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_score_returns_factors() {
        let equity = calculate_equity_impact(1.0);
        assert_eq!(equity.geographic.remote, 0.55);
        assert_eq!(equity.gender.female, 1.02);
        assert_eq!(equity.language.esl, 0.78);
        assert_eq!(equity.disability.with_disability, 0.85);
    }

    #[test]
    fn test_zero_score() {
        let equity = calculate_equity_impact(0.0);
        assert_eq!(equity.geographic.urban, 0.0);
        assert_eq!(equity.max_gap(), 0.0);
    }

    #[test]
    fn test_dimensions_scale_independently() {
        let equity = calculate_equity_impact(0.5);
        assert!((equity.gender.male - 0.49).abs() < 1e-9);
        assert!((equity.geographic.rural - 0.375).abs() < 1e-9);
        assert_eq!(equity.disability.without_disability, 0.5);
    }

    #[test]
    fn test_max_gap_is_geographic() {
        // urban 1.1 vs remote 0.55
        let equity = calculate_equity_impact(1.0);
        assert!((equity.max_gap() - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_max_gap_nan_score() {
        assert!(calculate_equity_impact(f64::NAN).max_gap().is_nan());
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(calculate_equity_impact(1.0)).unwrap();
        assert_eq!(json["gender"]["nonBinary"], 0.95);
        assert_eq!(json["language"]["nativeSpeakers"], 1.0);
        assert_eq!(json["disability"]["withoutDisability"], 1.0);
    }
}
