//! @acp:module "Configuration Overrides"
//! @acp:summary "Resolve the starting configuration from preset and CLI assignments"
//! @acp:domain cli
//! @acp:layer io

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{load_preset, Configuration};

/// Configuration sources given on the command line
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Preset file (JSON or YAML)
    pub preset: Option<PathBuf>,
    /// `FIELD=VALUE` assignments, applied in order
    pub assignments: Vec<String>,
}

impl ConfigOverrides {
    /// Load configuration with 2-layer merging:
    /// 1. Defaults, or the preset file when given
    /// 2. CLI assignments
    pub fn resolve(&self) -> Result<Configuration> {
        let mut config = self.base()?;
        for assignment in &self.assignments {
            config
                .apply_assignment(assignment)
                .with_context(|| format!("Failed to apply --set {}", assignment))?;
        }
        Ok(config)
    }

    /// Configuration before any CLI assignment is applied
    pub fn base(&self) -> Result<Configuration> {
        match self.preset {
            Some(ref path) => load_preset(path)
                .with_context(|| format!("Failed to load preset from {:?}", path)),
            None => Ok(Configuration::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_assignments_apply_in_order() {
        let overrides = ConfigOverrides {
            preset: None,
            assignments: vec![
                "coverageTarget=50".to_string(),
                "coverage-target=60".to_string(),
            ],
        };
        assert_eq!(overrides.resolve().unwrap().coverage_target, 60);
    }

    #[test]
    fn test_assignments_override_preset() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"projectName": "shop", "coverageTarget": 80}}"#).unwrap();

        let overrides = ConfigOverrides {
            preset: Some(file.path().to_path_buf()),
            assignments: vec!["coverageTarget=90".to_string()],
        };
        let config = overrides.resolve().unwrap();
        assert_eq!(config.project_name, "shop");
        assert_eq!(config.coverage_target, 90);
        assert_eq!(overrides.base().unwrap().coverage_target, 80);
    }

    #[test]
    fn test_bad_assignment_has_context() {
        let overrides = ConfigOverrides {
            preset: None,
            assignments: vec!["researchDepth=deep".to_string()],
        };
        let err = overrides.resolve().unwrap_err();
        assert!(format!("{:#}", err).contains("--set researchDepth=deep"));
    }
}
