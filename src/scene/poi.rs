use glam::Vec3;

/// A place the camera can fly to.
///
/// Built once from validated planet configuration and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    id: String,
    anchor: Vec3,
    approach_offset: Vec3,
}

impl PointOfInterest {
    /// Create a point of interest.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        anchor: Vec3,
        approach_offset: Vec3,
    ) -> Self {
        Self {
            id: id.into(),
            anchor,
            approach_offset,
        }
    }

    /// Stable identifier (the planet name).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// World-space anchor (the planet center).
    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Displacement from the anchor to the camera's resting position.
    #[must_use]
    pub fn approach_offset(&self) -> Vec3 {
        self.approach_offset
    }

    /// Where the camera rests while this point is active.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.anchor + self.approach_offset
    }
}
