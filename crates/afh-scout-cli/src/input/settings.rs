use std::fs;

use afh_scout_core::AnalysisConfig;

use super::file::resolve_path;

/// Load the analysis configuration from a settings file, or fall back to
/// the built-in defaults. YAML and JSON are recognized by extension;
/// anything else is tried as YAML, which accepts JSON as a subset.
pub fn load_config(path: Option<&str>) -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };

    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    let is_json = canonical
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let config: AnalysisConfig = if is_json {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    } else {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    };

    config.validate()?;
    Ok(config)
}
