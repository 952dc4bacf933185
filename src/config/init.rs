use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::get_config_path;
use super::schema::{Config, ScenarioConfig};
use crate::model::ImpactOptions;
use crate::report::ModelKind;

const HEADER: &str = "\
# impact-calc scenarios
#
# model: basic | enhanced
# strict: reject out-of-range inputs (internet 0-100, training/community 0-1)
# options: defaults for every scenario; a scenario's own `options` replaces them
";

/// Config written by `impact-calc init`.
pub fn starter_config() -> Config {
    Config {
        model: ModelKind::Enhanced,
        strict: false,
        options: ImpactOptions::default(),
        scenarios: vec![
            ScenarioConfig {
                name: "urban-district".to_string(),
                budget: 3500.0,
                internet: 88.0,
                training: 0.6,
                community: 0.5,
                options: None,
            },
            ScenarioConfig {
                name: "rural-district".to_string(),
                budget: 1800.0,
                internet: 62.0,
                training: 0.35,
                community: 0.45,
                options: Some(ImpactOptions {
                    is_rural: true,
                    socioeconomic_level: 0.8,
                    ..Default::default()
                }),
            },
        ],
    }
}

/// Write the starter config atomically.
///
/// Uses the default path when `path` is None. Refuses to replace an existing
/// file unless `force` is set. Returns the path written.
pub fn write_starter_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite",
            config_path.display()
        );
    }

    ensure_parent_dir(&config_path)?;

    let yaml = serde_saphyr::to_string(&starter_config())
        .context("Failed to serialize starter config")?;

    let mut file = AtomicWriteFile::open(&config_path)
        .with_context(|| format!("Failed to open atomic write file at {}", config_path.display()))?;
    file.write_all(HEADER.as_bytes())
        .context("Failed to write starter config")?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write starter config")?;
    file.commit().context("Failed to save starter config")?;

    tracing::info!(path = %config_path.display(), "wrote starter config");
    Ok(config_path)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
        }
    }
    Ok(())
}
