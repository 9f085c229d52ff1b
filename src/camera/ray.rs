use glam::{Mat4, Vec3};

/// Pixel size of the drawing surface, used to turn cursor positions into
/// normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in physical pixels.
    pub width: f32,
    /// Height in physical pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has an area that can be picked against.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Convert a pixel position to NDC (-1 to 1), y flipped for screen
    /// coordinates. `None` for an empty viewport.
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.is_empty() {
            return None;
        }
        Some((
            (x / self.width) * 2.0 - 1.0,
            1.0 - (y / self.height) * 2.0,
        ))
    }
}

/// World-space half line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point, on the near plane for picking rays.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a picking ray through the pixel `(x, y)` by unprojecting the
    /// near and far planes through the inverse view-projection.
    #[must_use]
    pub fn from_screen(
        x: f32,
        y: f32,
        viewport: Viewport,
        view_proj: Mat4,
    ) -> Option<Self> {
        let (ndc_x, ndc_y) = viewport.to_ndc(x, y)?;
        let inv_view_proj = view_proj.inverse();

        // wgpu depth range is [0, 1]
        let near = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        let direction = (far - near).try_normalize()?;
        Some(Self {
            origin: near,
            direction,
        })
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Bounding sphere used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// World-space center.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere.
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance along `ray` to the first intersection in front of the
    /// origin. When the origin is inside the sphere this is the exit point.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t = -b - root;
        if t > 0.0 {
            return Some(t);
        }
        // Inside the sphere: take the far intersection
        let t = -b + root;
        (t > 0.0).then_some(t)
    }
}
