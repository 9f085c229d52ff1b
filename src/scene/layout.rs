use glam::Vec3;

use crate::options::{OrbitLayout, PlanetConfig};

/// World-space anchor for a planet under the given layout.
#[must_use]
pub fn anchor_position(layout: OrbitLayout, planet: &PlanetConfig) -> Vec3 {
    let d = planet.distance;
    match layout {
        OrbitLayout::Spiral => Vec3::new(
            planet.angle.cos() * d,
            planet.angle.sin() * d * 0.5,
            -d,
        ),
        OrbitLayout::Line => Vec3::new(0.0, 0.0, -d),
    }
}

/// Camera displacement from the anchor: straight out along +Z, so the
/// fixed -Z view direction keeps the planet centered.
#[must_use]
pub fn approach_offset(planet: &PlanetConfig) -> Vec3 {
    Vec3::new(0.0, 0.0, planet.approach)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(distance: f32, angle: f32) -> PlanetConfig {
        PlanetConfig {
            name: "Test".into(),
            radius: 10.0,
            distance,
            angle,
            approach: 800.0,
            texture: String::new(),
        }
    }

    #[test]
    fn spiral_swings_and_recedes() {
        let p = planet(1000.0, std::f32::consts::FRAC_PI_2);
        let anchor = anchor_position(OrbitLayout::Spiral, &p);
        assert!(anchor.x.abs() < 1e-3);
        assert!((anchor.y - 500.0).abs() < 1e-3);
        assert_eq!(anchor.z, -1000.0);
    }

    #[test]
    fn spiral_at_zero_angle_lies_on_x() {
        let anchor = anchor_position(OrbitLayout::Spiral, &planet(3000.0, 0.0));
        assert_eq!(anchor, Vec3::new(3000.0, 0.0, -3000.0));
    }

    #[test]
    fn line_ignores_angle() {
        let anchor = anchor_position(OrbitLayout::Line, &planet(2000.0, 1.3));
        assert_eq!(anchor, Vec3::new(0.0, 0.0, -2000.0));
    }

    #[test]
    fn approach_is_along_positive_z() {
        assert_eq!(
            approach_offset(&planet(1.0, 0.0)),
            Vec3::new(0.0, 0.0, 800.0)
        );
    }
}
