use super::inputs::InputVector;
use super::options::ImpactOptions;

/// Strict check of a scenario's inputs.
/// Returns all validation errors at once (not just the first).
///
/// The formulas themselves never call this; it backs the opt-in `--strict` mode.
pub fn validate_inputs(inputs: &InputVector) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("budget", inputs.budget),
        ("internet", inputs.internet),
        ("training", inputs.training),
        ("community", inputs.community),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number, got {}", name, value));
        }
    }

    if inputs.budget < 0.0 && inputs.budget.is_finite() {
        errors.push("budget: must be non-negative".to_string());
    }
    if !(0.0..=100.0).contains(&inputs.internet) && inputs.internet.is_finite() {
        errors.push(format!(
            "internet: must be a percentage in 0-100, got {}",
            inputs.internet
        ));
    }
    for (name, value) in [("training", inputs.training), ("community", inputs.community)] {
        if !(0.0..=1.0).contains(&value) && value.is_finite() {
            errors.push(format!("{}: must be a fraction in 0-1, got {}", name, value));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_options(options: &ImpactOptions) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let level = options.socioeconomic_level;
    if !level.is_finite() {
        errors.push(format!(
            "options.socioeconomic_level: must be a finite number, got {}",
            level
        ));
    } else if level < 0.0 {
        errors.push("options.socioeconomic_level: must be non-negative".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        let inputs = InputVector::new(2500.0, 75.0, 0.5, 0.4);
        assert!(validate_inputs(&inputs).is_ok());
    }

    #[test]
    fn test_boundaries_are_valid() {
        assert!(validate_inputs(&InputVector::new(0.0, 0.0, 0.0, 0.0)).is_ok());
        assert!(validate_inputs(&InputVector::new(1e6, 100.0, 1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_negative_budget() {
        let errors = validate_inputs(&InputVector::new(-10.0, 75.0, 0.5, 0.4)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("budget"));
    }

    #[test]
    fn test_internet_out_of_range() {
        let errors = validate_inputs(&InputVector::new(100.0, 120.0, 0.5, 0.4)).unwrap_err();
        assert!(errors[0].starts_with("internet:"));
    }

    #[test]
    fn test_nan_reported_once() {
        let errors = validate_inputs(&InputVector::new(100.0, 50.0, f64::NAN, 0.4)).unwrap_err();
        assert_eq!(errors, vec!["training: must be a finite number, got NaN".to_string()]);
    }

    #[test]
    fn test_negative_infinite_budget_reported_once() {
        let errors =
            validate_inputs(&InputVector::new(f64::NEG_INFINITY, 75.0, 0.5, 0.4)).unwrap_err();
        assert_eq!(errors, vec!["budget: must be a finite number, got -inf".to_string()]);
    }

    #[test]
    fn test_collects_all_errors() {
        let inputs = InputVector::new(-1.0, 150.0, 2.0, -0.5);
        let errors = validate_inputs(&inputs).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_default_options_valid() {
        assert!(validate_options(&ImpactOptions::default()).is_ok());
    }

    #[test]
    fn test_negative_socioeconomic_level() {
        let options = ImpactOptions {
            socioeconomic_level: -0.5,
            ..Default::default()
        };
        let errors = validate_options(&options).unwrap_err();
        assert!(errors[0].contains("socioeconomic_level"));
    }

    #[test]
    fn test_infinite_socioeconomic_level() {
        let options = ImpactOptions {
            socioeconomic_level: f64::INFINITY,
            ..Default::default()
        };
        assert!(validate_options(&options).is_err());
    }
}
