//! Runtime input configuration with TOML file support.
//!
//! All sub-structs use `#[serde(default)]` so partial TOML files (e.g. only
//! overriding `[keyboard]`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TactileError;

/// Which pointer backend drives the facade.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Pick by target platform: touch on Android/iOS, mouse elsewhere.
    #[default]
    Auto,
    /// Multi-touch device.
    Touch,
    /// Mouse / desktop pointer.
    Mouse,
}

impl Backend {
    /// Resolve `Auto` to a concrete backend for the current target.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto => {
                if cfg!(any(target_os = "android", target_os = "ios")) {
                    Self::Touch
                } else {
                    Self::Mouse
                }
            }
            other => other,
        }
    }
}

/// On-screen keyboard options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct KeyboardOptions {
    /// Maximum field length in characters; unlimited if absent.
    pub max_length: Option<usize>,
}

/// Top-level input options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct InputOptions {
    /// Pointer backend selection.
    pub backend: Backend,
    /// On-screen keyboard options.
    pub keyboard: KeyboardOptions,
}

impl InputOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TactileError> {
        let content = std::fs::read_to_string(path).map_err(TactileError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TactileError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TactileError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TactileError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TactileError::Io)?;
        }
        std::fs::write(path, content).map_err(TactileError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = InputOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: InputOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
backend = "touch"
"#;
        let opts: InputOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.backend, Backend::Touch);
        assert_eq!(opts.keyboard.max_length, None);
    }

    #[test]
    fn keyboard_section_parses() {
        let toml_str = r"
[keyboard]
max_length = 32
";
        let opts: InputOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.keyboard.max_length, Some(32));
        assert_eq!(opts.backend, Backend::Auto);
    }

    #[test]
    fn explicit_backends_resolve_to_themselves() {
        assert_eq!(Backend::Touch.resolve(), Backend::Touch);
        assert_eq!(Backend::Mouse.resolve(), Backend::Mouse);
        // Auto resolves to something concrete
        assert_ne!(Backend::Auto.resolve(), Backend::Auto);
    }
}
