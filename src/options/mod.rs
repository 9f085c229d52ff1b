//! Scene, camera, and navigation options with TOML file support.
//!
//! Every sub-struct uses `#[serde(default)]`, so a partial TOML file (for
//! example one that only overrides `[navigation]`) fills the rest with
//! defaults.

mod camera;
mod navigation;
mod planets;
mod stars;

use std::path::Path;

pub use camera::CameraOptions;
pub use navigation::{BusyPolicy, NavigationOptions};
pub use planets::{OrbitLayout, PlanetConfig, PlanetOptions};
use serde::{Deserialize, Serialize};
pub use stars::StarFieldOptions;

use crate::error::OrreryError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and starting pose.
    pub camera: CameraOptions,
    /// Transition timing and busy policy.
    pub navigation: NavigationOptions,
    /// Backdrop star field.
    pub stars: StarFieldOptions,
    /// Planet list and layout.
    pub planets: PlanetOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] if the file cannot be read and
    /// [`OrreryError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, OrreryError> {
        toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError`] if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[navigation]
transition_ms = 400
busy_policy = "queue_latest"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.navigation.transition_ms, 400);
        assert_eq!(opts.navigation.busy_policy, BusyPolicy::QueueLatest);
        assert_eq!(opts.navigation.easing, EasingFunction::CubicOut);
        assert_eq!(opts.camera.fovy, 75.0);
        assert_eq!(opts.planets.list.len(), 8);
    }

    #[test]
    fn planet_list_replaces_defaults() {
        let toml_str = r#"
[planets]
layout = "line"

[[planets.list]]
name = "Mercury"
radius = 50.0
distance = 2000.0
approach = 200.0
texture = "assets/mercury.png"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.planets.layout, OrbitLayout::Line);
        assert_eq!(opts.planets.list.len(), 1);
        assert_eq!(opts.planets.list[0].angle, 0.0);
        assert_eq!(opts.planets.spin_speed, 0.12);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[navigation\ntransition_ms = 1")
            .unwrap_err();
        assert!(matches!(err, OrreryError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("orrery-options-{}", std::process::id()));
        let path = dir.join("view.toml");

        let mut opts = Options::default();
        opts.stars.seed = Some(7);
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn default_navigation_matches_original_feel() {
        let nav = NavigationOptions::default();
        assert_eq!(nav.transition_duration().as_millis(), 1000);
        assert_eq!(nav.busy_policy, BusyPolicy::Drop);
        assert!(nav.watchdog_grace().is_some());
    }

    #[test]
    fn zero_grace_disables_watchdog() {
        let opts =
            Options::from_toml("[navigation]\nwatchdog_grace_ms = 0").unwrap();
        assert!(opts.navigation.watchdog_grace().is_none());
    }

    #[test]
    fn disabled_watchdog_survives_save_and_load() {
        let dir = std::env::temp_dir()
            .join(format!("orrery-watchdog-{}", std::process::id()));
        let path = dir.join("view.toml");

        let mut opts = Options::default();
        opts.navigation.watchdog_grace_ms = 0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.navigation.watchdog_grace_ms, 0);
        assert!(loaded.navigation.watchdog_grace().is_none());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
