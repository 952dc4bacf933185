mod init;
mod schema;

pub use init::{starter_config, write_starter_config};
pub use schema::{Config, ScenarioConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/impact-calc/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("impact-calc"))
}

/// Get the default config file path (~/.config/impact-calc/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load scenarios from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/impact-calc/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Run `impact-calc init` to create one",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    tracing::info!(
        path = %config_path.display(),
        scenarios = config.scenarios.len(),
        "loaded config"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ModelKind;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_temp(
            r#"
model: basic
strict: true
options:
  socioeconomic_level: 0.8
scenarios:
  - name: district-a
    budget: 2500
    internet: 75
    training: 0.5
    community: 0.4
  - name: district-b
    budget: 1200
    internet: 55
    training: 0.3
    community: 0.2
    options:
      is_rural: true
"#,
        );
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.model, ModelKind::Basic);
        assert!(config.strict);
        assert_eq!(config.scenarios.len(), 2);

        let a = &config.scenarios[0];
        assert_eq!(a.inputs().to_array(), [2500.0, 75.0, 0.5, 0.4]);
        assert_eq!(a.effective_options(&config.options).socioeconomic_level, 0.8);

        let b = &config.scenarios[1];
        let b_options = b.effective_options(&config.options);
        assert!(b_options.is_rural);
        // per-scenario options replace the defaults entirely
        assert_eq!(b_options.socioeconomic_level, 1.0);
    }

    #[test]
    fn test_load_minimal_config() {
        let file = write_temp("scenarios: []\n");
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.model, ModelKind::Enhanced);
        assert!(!config.strict);
        assert_eq!(config.options, crate::model::ImpactOptions::default());
        assert!(config.scenarios.is_empty());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml() {
        let file = write_temp("scenarios:\n  - name: a\n    budget: lots\n");
        let err = load_config(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_temp("scenarios: []\nbudget_cap: 10\n");
        assert!(load_config(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_missing_input_field_rejected() {
        let file = write_temp("scenarios:\n  - name: a\n    budget: 100\n    internet: 50\n    training: 0.5\n");
        assert!(load_config(Some(file.path().to_path_buf())).is_err());
    }
}
