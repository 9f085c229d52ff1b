use serde::{Deserialize, Serialize};

/// How planet anchors are laid out from their orbit parameters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrbitLayout {
    /// Planets recede along -Z while swinging around the Z axis by their
    /// orbit angle (vertical swing halved).
    #[default]
    Spiral,
    /// Planets sit on the -Z axis at their orbit distance.
    Line,
}

/// One planet as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanetConfig {
    /// Unique, non-empty planet name.
    pub name: String,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Distance from the origin along the layout path.
    pub distance: f32,
    /// Orbit angle in radians (used by [`OrbitLayout::Spiral`]).
    #[serde(default)]
    pub angle: f32,
    /// How far in front of the planet (+Z) the camera rests.
    pub approach: f32,
    /// Texture location: an `http(s)://` URL or a file path.
    pub texture: String,
}

impl PlanetConfig {
    fn new(
        name: &str,
        radius: f32,
        distance: f32,
        angle: f32,
        approach: f32,
        texture: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            radius,
            distance,
            angle,
            approach,
            texture: texture.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Planet list, layout, and spin.
pub struct PlanetOptions {
    /// Anchor layout.
    pub layout: OrbitLayout,
    /// Constant spin about +Y in radians per second.
    pub spin_speed: f32,
    /// Planets in navigation order.
    pub list: Vec<PlanetConfig>,
}

const WIKIMEDIA: &str = "https://upload.wikimedia.org/wikipedia/commons";

impl Default for PlanetOptions {
    fn default() -> Self {
        let tex = |path: &str| format!("{WIKIMEDIA}/{path}");
        let list = vec![
            PlanetConfig::new(
                "Mercury",
                50.0,
                3000.0,
                0.2,
                800.0,
                &tex("2/2e/Mercury_transparent.png"),
            ),
            PlanetConfig::new(
                "Venus",
                100.0,
                5000.0,
                1.0,
                800.0,
                &tex("e/e5/Venus-real_color.png"),
            ),
            PlanetConfig::new(
                "Earth",
                120.0,
                7000.0,
                2.5,
                800.0,
                &tex("9/97/The_Earth_seen_from_Apollo_17.jpg"),
            ),
            PlanetConfig::new(
                "Mars",
                80.0,
                10_000.0,
                3.8,
                800.0,
                &tex("0/02/OSIRIS_Mars_true_color.jpg"),
            ),
            PlanetConfig::new(
                "Jupiter",
                800.0,
                20_000.0,
                5.1,
                1200.0,
                &tex("e/e1/Jupiter_%28transparent%29.png"),
            ),
            PlanetConfig::new(
                "Saturn",
                700.0,
                30_000.0,
                6.7,
                1300.0,
                &tex("c/c7/Saturn_during_Equinox.jpg"),
            ),
            PlanetConfig::new(
                "Uranus",
                600.0,
                40_000.0,
                7.9,
                1400.0,
                &tex("3/3d/Uranus2.jpg"),
            ),
            PlanetConfig::new(
                "Neptune",
                600.0,
                50_000.0,
                9.3,
                1500.0,
                &tex("5/56/Neptune_Full.jpg"),
            ),
        ];

        Self {
            layout: OrbitLayout::Spiral,
            spin_speed: 0.12,
            list,
        }
    }
}
