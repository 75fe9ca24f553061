use crate::scene::{DrawKind, DrawList};
use crate::shader::{ShaderError, ShaderProgram};
use crate::text::FontSystem;

use super::shapes::polygon::PolygonRenderer;
use super::shapes::text::TextRenderer;
use super::{RenderCtx, RenderTarget};

/// Draws a whole `DrawList` in paint order.
///
/// Every renderer uploads its data for the frame first; a single render pass
/// then walks the same-kind runs of the list and switches pipeline per run, so
/// text recorded between two polygons is painted between them.
pub struct Compositor {
    polygons: PolygonRenderer,
    text: TextRenderer,
}

impl Compositor {
    pub fn new(program: ShaderProgram) -> Result<Self, ShaderError> {
        Ok(Self {
            polygons: PolygonRenderer::new(program)?,
            text: TextRenderer::new(),
        })
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        let runs = draw_list.runs();
        if runs.is_empty() {
            return;
        }

        if runs.iter().any(|r| r.kind == DrawKind::Polygon) {
            self.polygons.prepare(ctx, draw_list);
        }
        if runs.iter().any(|r| r.kind == DrawKind::Text) {
            self.text.prepare(ctx, draw_list, font_system);
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clock scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for run in runs {
            match run.kind {
                DrawKind::Polygon => self.polygons.draw(&mut rpass, run),
                DrawKind::Text => self.text.draw(&mut rpass, run),
            }
        }
    }
}
