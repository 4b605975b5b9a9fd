//! Tunable transition and animation settings with TOML preset support.
//!
//! Options serialize to/from TOML so a host can keep named presets on disk
//! (for example a slow cinematic preset next to a snappy one).

mod animation;
mod transition;

use std::path::Path;

pub use animation::AnimationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::GlidepathError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[transition]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Viewport transition timing.
    pub transition: TransitionOptions,
    /// Camera animation parameters.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GlidepathError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GlidepathError> {
        toml::from_str(content)
            .map_err(|e| GlidepathError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GlidepathError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlidepathError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::debug!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[transition]
max_duration_secs = 1.25
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.transition.max_duration_secs, 1.25);
        // Everything else should be default
        assert_eq!(opts.animation, AnimationOptions::default());
    }

    #[test]
    fn easing_is_tagged_by_kind() {
        let toml_str = r#"
[animation]
easing = { kind = "quadratic_in_out" }
frame_rate = 30
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.easing, EasingFunction::QuadraticInOut);
        assert_eq!(
            opts.animation.frame_interval(),
            web_time::Duration::from_secs(1) / 30
        );
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[transition\nmax = ").unwrap_err();
        assert!(matches!(err, GlidepathError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/nonexistent/glidepath.toml");
        let err = Options::load(path).unwrap_err();
        assert!(matches!(err, GlidepathError::Io(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("glidepath-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.transition.max_duration_secs = 0.5;
        opts.save(&dir.join("snappy.toml")).unwrap();
        Options::default().save(&dir.join("cinematic.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::load(&dir.join("snappy.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["cinematic", "snappy"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_lists_both_sections() {
        let schema = serde_json::to_value(Options::json_schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("transition").is_some());
        assert!(properties.get("animation").is_some());
    }
}
