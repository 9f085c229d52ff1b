use std::f32::consts::{PI, TAU};

/// Vertex layout shared by the planet shader: position, then UV.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Position on the unit sphere.
    pub position: [f32; 3],
    /// Equirectangular texture coordinate.
    pub uv: [f32; 2],
}

/// Unit UV sphere, scaled per planet by its model matrix.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    /// Vertices, `(stacks + 1) * (slices + 1)` of them.
    pub vertices: Vec<SphereVertex>,
    /// Triangle list indices, counter-clockwise seen from outside.
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Build a unit sphere with `slices` segments around Y and `stacks`
    /// segments from pole to pole. Both are raised to at least 3 and 2.
    #[must_use]
    pub fn uv_sphere(slices: u32, stacks: u32) -> Self {
        let slices = slices.max(3);
        let stacks = stacks.max(2);

        let mut vertices =
            Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
        for stack in 0..=stacks {
            let v = stack as f32 / stacks as f32;
            let theta = v * PI;
            let (sin_t, cos_t) = theta.sin_cos();
            for slice in 0..=slices {
                let u = slice as f32 / slices as f32;
                let phi = u * TAU;
                let (sin_p, cos_p) = phi.sin_cos();
                vertices.push(SphereVertex {
                    position: [-cos_p * sin_t, cos_t, sin_p * sin_t],
                    uv: [u, v],
                });
            }
        }

        let row = slices + 1;
        let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
        for stack in 0..stacks {
            for slice in 0..slices {
                let a = stack * row + slice;
                let b = a + row;
                if stack != 0 {
                    indices.extend_from_slice(&[a, b, a + 1]);
                }
                if stack != stacks - 1 {
                    indices.extend_from_slice(&[a + 1, b, b + 1]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Number of indices, as the draw call wants it.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
