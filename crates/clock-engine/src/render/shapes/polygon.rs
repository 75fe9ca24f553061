use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::{DrawCmd, DrawList, DrawRun};
use crate::shader::{ShaderError, ShaderProgram};

use super::common::{
    create_viewport_ubo, grown_capacity, premul_alpha_blend, triangle_list_primitive,
    viewport_layout_entry, PaintRanges, ViewportUniform,
};

/// Vertex attribute locations fed by [`PolygonRenderer`].
pub const VERTEX_INPUTS: [u32; 2] = [0, 1];

/// Renderer for `DrawCmd::Polygon`.
///
/// Polygons are expanded on the CPU into a centroid triangle fan with one
/// color per vertex; the GPU interpolates colors across each triangle. All
/// polygons of a frame share one vertex buffer, uploaded once in `prepare`
/// and drawn run by run.
///
/// The pipeline is built from a caller-supplied [`ShaderProgram`]. The vertex
/// entry receives `@location(0) pos: vec2<f32>` in logical pixels and
/// `@location(1) color: vec4<f32>` (premultiplied), and the viewport uniform
/// (`vec2<f32>` size + padding) at `@group(0) @binding(0)`.
pub struct PolygonRenderer {
    program: ShaderProgram,

    // pipeline
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    // geometry
    vertices: Vec<PolygonGpuVertex>,
    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
    ranges: PaintRanges,
}

impl PolygonRenderer {
    /// Checks that `program` consumes only the attributes this renderer provides.
    pub fn new(program: ShaderProgram) -> Result<Self, ShaderError> {
        program.require_vertex_inputs(&VERTEX_INPUTS)?;

        Ok(Self {
            program,
            pipeline_format: None,
            pipeline: None,
            bind_group: None,
            viewport_ubo: None,
            vertices: Vec::new(),
            vbo: None,
            vbo_capacity: 0,
            ranges: PaintRanges::default(),
        })
    }

    /// Tessellates every polygon in `draw_list` and uploads the vertex data.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, draw_list: &mut DrawList) {
        self.ensure_pipeline(ctx);

        self.vertices.clear();
        self.ranges.clear();

        for item in draw_list.iter_in_paint_order() {
            let start = self.vertices.len() as u32;
            if let DrawCmd::Polygon(cmd) = &item.cmd {
                for tri in cmd.triangles() {
                    self.vertices.extend(tri.iter().map(|v| PolygonGpuVertex {
                        pos: [v.pos.x, v.pos.y],
                        color: v.color.to_array(),
                    }));
                }
            }
            self.ranges.push(start..self.vertices.len() as u32);
        }

        if self.vertices.is_empty() {
            return;
        }

        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue
                .write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::new(ctx.viewport)));
        }

        self.ensure_vertex_capacity(ctx, self.vertices.len());
        if let Some(vbo) = self.vbo.as_ref() {
            ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));
        }
    }

    /// Draws the polygons of one paint-order run prepared by [`prepare`](Self::prepare).
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, run: DrawRun) {
        let Some(span) = self.ranges.span(run.start, run.len) else { return; };

        let Some(pipeline) = self.pipeline.as_ref() else { return; };
        let Some(bind_group) = self.bind_group.as_ref() else { return; };
        let Some(vbo) = self.vbo.as_ref() else { return; };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(span, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let (vs, fs) = self.program.create_modules(ctx.device);

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("clock polygon bgl"),
            entries: &[viewport_layout_entry()],
        });

        let viewport_ubo = create_viewport_ubo(ctx.device, "clock polygon viewport ubo");

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("clock polygon bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("clock polygon pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("clock polygon pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some(self.program.vertex.entry_point.as_str()),
                compilation_options: Default::default(),
                buffers: &[PolygonGpuVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some(self.program.fragment.entry_point.as_str()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: triangle_list_primitive(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("polygon pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(viewport_ubo);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }
        let new_cap = grown_capacity(required, 1024);
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("clock polygon vbo"),
            size: (new_cap * std::mem::size_of::<PolygonGpuVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

/// Vertex layout (24 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  color  [f32; 4]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct PolygonGpuVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl PolygonGpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PolygonGpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
