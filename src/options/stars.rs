use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Backdrop star field parameters.
pub struct StarFieldOptions {
    /// Number of stars.
    pub count: usize,
    /// Width and height of the star volume, centered on the origin.
    pub spread: f32,
    /// Depth of the star volume, extending from z = 0 to z = -depth.
    pub depth: f32,
    /// Seed for reproducible star placement. Random when unset.
    pub seed: Option<u64>,
}

impl Default for StarFieldOptions {
    fn default() -> Self {
        Self {
            count: 20_000,
            spread: 100_000.0,
            depth: 100_000.0,
            seed: None,
        }
    }
}
