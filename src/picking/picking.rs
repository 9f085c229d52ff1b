use std::collections::BTreeMap;

use glam::Mat4;

use crate::camera::ray::{Ray, Sphere, Viewport};

/// Hit-testable spheres keyed by point-of-interest index.
#[derive(Debug, Clone, Default)]
pub struct HitRegistry {
    targets: BTreeMap<usize, Sphere>,
}

impl HitRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `index` selectable by clicking `sphere`. Re-registering an
    /// index replaces its sphere.
    pub fn register(&mut self, index: usize, sphere: Sphere) {
        let _ = self.targets.insert(index, sphere);
    }

    /// Stop hit-testing `index`. Returns whether it was registered.
    pub fn unregister(&mut self, index: usize) -> bool {
        self.targets.remove(&index).is_some()
    }

    /// Whether `index` is currently hit-testable.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.targets.contains_key(&index)
    }

    /// Number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Index of the nearest sphere hit by `ray`. Equal distances resolve
    /// to the lower index.
    #[must_use]
    pub fn pick(&self, ray: &Ray) -> Option<usize> {
        let mut closest_t = f32::INFINITY;
        let mut closest = None;
        for (&index, sphere) in &self.targets {
            if let Some(t) = sphere.intersect(ray) {
                if t < closest_t {
                    closest_t = t;
                    closest = Some(index);
                }
            }
        }
        closest
    }
}

/// Everything needed to turn a click position into a hit: the registry,
/// the current view-projection, and the viewport size.
#[derive(Debug, Clone, Copy)]
pub struct Picker<'a> {
    /// Registered targets.
    pub registry: &'a HitRegistry,
    /// Camera view-projection at the time of the click.
    pub view_proj: Mat4,
    /// Surface size in physical pixels.
    pub viewport: Viewport,
}

impl Picker<'_> {
    /// Index under the pixel `(x, y)`, if any.
    #[must_use]
    pub fn pick_at(&self, x: f32, y: f32) -> Option<usize> {
        let ray = Ray::from_screen(x, y, self.viewport, self.view_proj)?;
        self.registry.pick(&ray)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::Camera;
    use crate::options::CameraOptions;

    fn forward_ray() -> Ray {
        Ray {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }

    #[test]
    fn empty_registry_misses() {
        assert_eq!(HitRegistry::new().pick(&forward_ray()), None);
    }

    #[test]
    fn nearest_hit_wins() {
        let mut registry = HitRegistry::new();
        registry.register(0, Sphere::new(Vec3::new(0.0, 0.0, -100.0), 5.0));
        registry.register(1, Sphere::new(Vec3::new(0.0, 0.0, -50.0), 5.0));
        registry.register(2, Sphere::new(Vec3::new(50.0, 0.0, -20.0), 5.0));
        assert_eq!(registry.pick(&forward_ray()), Some(1));
    }

    #[test]
    fn unregistered_targets_are_ignored() {
        let mut registry = HitRegistry::new();
        registry.register(3, Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0));
        assert!(registry.unregister(3));
        assert!(!registry.unregister(3));
        assert!(registry.is_empty());
        assert_eq!(registry.pick(&forward_ray()), None);
    }

    #[test]
    fn click_through_camera_hits_planet_ahead() {
        let camera = Camera::from_options(&CameraOptions::default(), 1.0);
        let mut registry = HitRegistry::new();
        registry.register(4, Sphere::new(Vec3::new(0.0, 0.0, -1000.0), 100.0));
        let picker = Picker {
            registry: &registry,
            view_proj: camera.build_matrix(),
            viewport: Viewport::new(600.0, 600.0),
        };
        assert_eq!(picker.pick_at(300.0, 300.0), Some(4));
        assert_eq!(picker.pick_at(0.0, 0.0), None);
    }
}
