//! Scene model: points of interest, planet bodies, and the star field.
//!
//! The scene is built once from [`PlanetOptions`] and
//! [`StarFieldOptions`]. Points of interest are immutable after
//! construction; bodies carry the only per-frame state (spin angle and
//! texture status).

mod layout;
/// UV sphere geometry shared by all planets.
pub mod mesh;
mod poi;
mod star_field;

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use glam::{Mat4, Quat, Vec3};
pub use layout::{anchor_position, approach_offset};
pub use poi::PointOfInterest;
pub use star_field::StarField;

use crate::camera::ray::Sphere;
use crate::options::{PlanetConfig, PlanetOptions, StarFieldOptions};

/// Errors from validating scene configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The planet list is empty, so there is nothing to navigate.
    NoPlanets,
    /// A planet has an empty (or whitespace-only) name.
    EmptyName {
        /// Position in the planet list.
        index: usize,
    },
    /// Two planets share a name.
    DuplicateName(String),
    /// A planet radius is negative or not finite.
    InvalidRadius {
        /// Planet name.
        name: String,
        /// Offending radius.
        radius: f32,
    },
    /// A planet placement value is NaN or infinite.
    NonFinite {
        /// Planet name.
        name: String,
        /// Which field was not finite.
        field: &'static str,
    },
    /// Star field spread or depth is negative or not finite.
    InvalidStarField {
        /// Configured spread.
        spread: f32,
        /// Configured depth.
        depth: f32,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlanets => write!(f, "planet list is empty"),
            Self::EmptyName { index } => {
                write!(f, "planet #{index} has an empty name")
            }
            Self::DuplicateName(name) => {
                write!(f, "planet name {name:?} is used more than once")
            }
            Self::InvalidRadius { name, radius } => {
                write!(f, "planet {name:?} has invalid radius {radius}")
            }
            Self::NonFinite { name, field } => {
                write!(f, "planet {name:?} has a non-finite {field}")
            }
            Self::InvalidStarField { spread, depth } => write!(
                f,
                "star field spread {spread} / depth {depth} must be finite \
                 and non-negative"
            ),
        }
    }
}

impl std::error::Error for SceneError {}

/// Texture status of a planet body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    /// Load requested, result not yet received.
    Pending,
    /// Texture attached; the body is drawn and selectable.
    Ready,
    /// Load failed; the body stays invisible and unselectable.
    Failed,
}

/// The visual representation of one point of interest.
#[derive(Debug, Clone)]
pub struct PlanetBody {
    name: String,
    radius: f32,
    center: Vec3,
    texture_source: String,
    texture: TextureState,
    /// Spin about +Y in radians.
    pub rotation: f32,
}

impl PlanetBody {
    fn from_config(config: &PlanetConfig, center: Vec3) -> Self {
        Self {
            name: config.name.clone(),
            radius: config.radius,
            center,
            texture_source: config.texture.clone(),
            texture: TextureState::Pending,
            rotation: 0.0,
        }
    }

    /// Planet name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Sphere center (equal to the point of interest's anchor).
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Where the texture is loaded from.
    #[must_use]
    pub fn texture_source(&self) -> &str {
        &self.texture_source
    }

    /// Current texture status.
    #[must_use]
    pub fn texture_state(&self) -> TextureState {
        self.texture
    }

    /// Record the outcome of the texture load.
    pub fn set_texture_state(&mut self, state: TextureState) {
        self.texture = state;
    }

    /// Hit-test volume.
    #[must_use]
    pub fn bounding_sphere(&self) -> Sphere {
        Sphere::new(self.center, self.radius)
    }

    /// Model matrix for the unit sphere mesh.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.radius),
            Quat::from_rotation_y(self.rotation),
            self.center,
        )
    }
}

/// The complete scene: ordered points of interest, their bodies, and the
/// star backdrop.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    points: Vec<PointOfInterest>,
    bodies: Vec<PlanetBody>,
    stars: StarField,
    spin_speed: f32,
}

impl SolarSystem {
    /// Validate configuration and build the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] if the planet list is empty, a name is empty
    /// or duplicated, a radius is negative, a placement value is not
    /// finite, or the star volume is invalid.
    pub fn build(
        planets: &PlanetOptions,
        stars: &StarFieldOptions,
    ) -> Result<Self, SceneError> {
        validate_planets(&planets.list)?;
        if !planets.spin_speed.is_finite() {
            return Err(SceneError::NonFinite {
                name: "*".to_owned(),
                field: "spin_speed",
            });
        }

        let mut points = Vec::with_capacity(planets.list.len());
        let mut bodies = Vec::with_capacity(planets.list.len());
        for config in &planets.list {
            let anchor = anchor_position(planets.layout, config);
            points.push(PointOfInterest::new(
                config.name.clone(),
                anchor,
                approach_offset(config),
            ));
            bodies.push(PlanetBody::from_config(config, anchor));
        }

        let stars = StarField::generate(stars)?;
        log::info!(
            "built scene: {} planets ({:?} layout), {} stars",
            points.len(),
            planets.layout,
            stars.len()
        );

        Ok(Self {
            points,
            bodies,
            stars,
            spin_speed: planets.spin_speed,
        })
    }

    /// Points of interest in navigation order.
    #[must_use]
    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    /// Planet bodies, index-aligned with [`points`](Self::points).
    #[must_use]
    pub fn bodies(&self) -> &[PlanetBody] {
        &self.bodies
    }

    /// Mutable access to one body.
    pub fn body_mut(&mut self, index: usize) -> Option<&mut PlanetBody> {
        self.bodies.get_mut(index)
    }

    /// Backdrop stars.
    #[must_use]
    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    /// Advance every body's spin by `dt`. Independent of navigation.
    pub fn spin(&mut self, dt: Duration) {
        let delta = self.spin_speed * dt.as_secs_f32();
        for body in &mut self.bodies {
            body.rotation = (body.rotation + delta) % std::f32::consts::TAU;
        }
    }
}

fn validate_planets(list: &[PlanetConfig]) -> Result<(), SceneError> {
    if list.is_empty() {
        return Err(SceneError::NoPlanets);
    }

    let mut seen = HashSet::with_capacity(list.len());
    for (index, planet) in list.iter().enumerate() {
        let name = planet.name.trim();
        if name.is_empty() {
            return Err(SceneError::EmptyName { index });
        }
        if !seen.insert(name) {
            return Err(SceneError::DuplicateName(name.to_owned()));
        }
        if !planet.radius.is_finite() || planet.radius < 0.0 {
            return Err(SceneError::InvalidRadius {
                name: name.to_owned(),
                radius: planet.radius,
            });
        }
        for (field, value) in [
            ("distance", planet.distance),
            ("angle", planet.angle),
            ("approach", planet.approach),
        ] {
            if !value.is_finite() {
                return Err(SceneError::NonFinite {
                    name: name.to_owned(),
                    field,
                });
            }
        }
    }
    Ok(())
}
