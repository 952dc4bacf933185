use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// The four program factors every formula works from.
///
/// Magnitudes are not checked here. Out-of-range or NaN values flow through
/// the formulas untouched; see [`crate::model::validate_inputs`] for the
/// opt-in strict contract.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InputVector {
    /// Program budget (currency units)
    pub budget: f64,
    /// Internet coverage, percent (0-100)
    pub internet: f64,
    /// Share of staff trained (0-1)
    pub training: f64,
    /// Community engagement (0-1)
    pub community: f64,
}

impl InputVector {
    pub const LEN: usize = 4;

    pub fn new(budget: f64, internet: f64, training: f64, community: f64) -> Self {
        Self {
            budget,
            internet,
            training,
            community,
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.budget, self.internet, self.training, self.community]
    }
}

impl From<[f64; 4]> for InputVector {
    fn from([budget, internet, training, community]: [f64; 4]) -> Self {
        Self::new(budget, internet, training, community)
    }
}

impl TryFrom<&[f64]> for InputVector {
    type Error = InputError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [budget, internet, training, community] => {
                Ok(Self::new(*budget, *internet, *training, *community))
            }
            _ => Err(InputError::Length {
                expected: Self::LEN,
                found: values.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array_keeps_order() {
        let inputs = InputVector::from([2500.0, 75.0, 0.5, 0.4]);
        assert_eq!(inputs.budget, 2500.0);
        assert_eq!(inputs.internet, 75.0);
        assert_eq!(inputs.training, 0.5);
        assert_eq!(inputs.community, 0.4);
        assert_eq!(inputs.to_array(), [2500.0, 75.0, 0.5, 0.4]);
    }

    #[test]
    fn test_try_from_slice() {
        let values = vec![1000.0, 60.0, 0.2, 0.1];
        let inputs = InputVector::try_from(values.as_slice()).unwrap();
        assert_eq!(inputs, InputVector::new(1000.0, 60.0, 0.2, 0.1));
    }

    #[test]
    fn test_try_from_short_slice() {
        let values = [1000.0, 60.0];
        let err = InputVector::try_from(&values[..]).unwrap_err();
        assert_eq!(err, InputError::Length { expected: 4, found: 2 });
        assert_eq!(err.to_string(), "input vector must have 4 elements, found 2");
    }

    #[test]
    fn test_try_from_long_slice() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(InputVector::try_from(&values[..]).is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
budget: 2500
internet: 75
training: 0.5
community: 0.4
"#;
        let inputs: InputVector = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(inputs, InputVector::new(2500.0, 75.0, 0.5, 0.4));
    }
}
