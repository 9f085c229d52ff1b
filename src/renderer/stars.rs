use wgpu::util::DeviceExt;

use super::pipeline_util;
use crate::gpu::render_context::RenderContext;
use crate::scene::StarField;

/// Draws the star field as a point list.
///
/// Points rasterize at one pixel regardless of distance.
pub struct StarRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: Option<wgpu::Buffer>,
    count: u32,
}

impl StarRenderer {
    /// Upload star positions and build the pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        stars: &StarField,
    ) -> Self {
        let vertex_buffer = (!stars.is_empty()).then(|| {
            context.device.create_buffer_init(
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Star Vertex Buffer"),
                    contents: bytemuck::cast_slice(stars.positions()),
                    usage: wgpu::BufferUsages::VERTEX,
                },
            )
        });

        Self {
            pipeline: Self::create_pipeline(context, camera_layout),
            vertex_buffer,
            count: stars.len() as u32,
        }
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/stars.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Star Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            },
        );

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Star Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: size_of::<[f32; 3]>()
                            as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &pipeline_util::surface_targets(context.format()),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::PointList,
                    ..Default::default()
                },
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Record the draw. Expects the camera bind group at slot 0.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        let Some(vertex_buffer) = &self.vertex_buffer else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        pass.draw(0..self.count, 0..1);
    }
}
