//! Crate-level error types.

use std::fmt;

use crate::assets::AssetError;
use crate::gpu::render_context::RenderContextError;
use crate::navigation::NavigationError;
use crate::scene::SceneError;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Planet or star-field configuration failed validation.
    Scene(SceneError),
    /// Navigation could not be set up or a command was rejected.
    Navigation(NavigationError),
    /// Texture loader could not be started.
    Asset(AssetError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Scene(e) => write!(f, "scene error: {e}"),
            Self::Navigation(e) => write!(f, "navigation error: {e}"),
            Self::Asset(e) => write!(f, "asset error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Scene(e) => Some(e),
            Self::Navigation(e) => Some(e),
            Self::Asset(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::Viewer(_) => None,
        }
    }
}

impl From<RenderContextError> for OrreryError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<SceneError> for OrreryError {
    fn from(e: SceneError) -> Self {
        Self::Scene(e)
    }
}

impl From<NavigationError> for OrreryError {
    fn from(e: NavigationError) -> Self {
        Self::Navigation(e)
    }
}

impl From<AssetError> for OrreryError {
    fn from(e: AssetError) -> Self {
        Self::Asset(e)
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
