//! @acp:module "Preset Loader"
//! @acp:summary "Load a starting configuration from a JSON or YAML preset"
//! @acp:domain cli
//! @acp:layer io

use std::path::Path;

use super::Configuration;
use crate::error::Result;

/// Load a preset file. Missing keys and blank text fields take their defaults.
///
/// `.yaml`/`.yml` files are read as YAML, anything else as JSON. Presets are
/// only ever read; the generator never writes configuration back.
pub fn load_preset(path: &Path) -> Result<Configuration> {
    let content = std::fs::read_to_string(path)?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let mut config: Configuration = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    config.reset_blank_text();
    config.validate()?;

    tracing::debug!(path = %path.display(), "Loaded preset");
    Ok(config)
}
