use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Affine, BezPath, Color, Rgba8Premul};
use crate::foundation::error::{ProcError, ProcResult};
use crate::render::backend::{CpuBackendOpts, FrameRGBA, RenderBackend};
use crate::render::plan::{DrawOp, FramePlan};
use crate::text::layout::TextLayoutEngine;

/// CPU raster backend built on `vello_cpu`.
pub struct CpuBackend {
    opts: CpuBackendOpts,
    ctx: Option<vello_cpu::RenderContext>,
    text_engine: Option<TextLayoutEngine>,
}

impl CpuBackend {
    /// Create a backend with the given options.
    pub fn new(opts: CpuBackendOpts) -> Self {
        Self {
            opts,
            ctx: None,
            text_engine: None,
        }
    }

    fn take_ctx(&mut self, width: u16, height: u16) -> vello_cpu::RenderContext {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        ctx
    }

    fn draw_op(&mut self, op: &DrawOp, ctx: &mut vello_cpu::RenderContext) -> ProcResult<()> {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match op {
            // Clears are resolved before rasterizing.
            DrawOp::Clear { .. } => Ok(()),
            DrawOp::Fill {
                outline,
                transform,
                color,
            }
            | DrawOp::Stroke {
                outline,
                transform,
                color,
            } => {
                ctx.set_transform(affine_to_cpu(*transform));
                ctx.set_paint(solid(*color));
                ctx.fill_path(&bezpath_to_cpu(outline));
                Ok(())
            }
            DrawOp::Text {
                text,
                font,
                size,
                color,
                align,
                anchor,
                transform,
            } => {
                let shaped = self
                    .text_engine
                    .get_or_insert_with(TextLayoutEngine::new)
                    .layout_plain(text, &font.0, *size as f32, (*color).into())?;
                let (dx, dy) = shaped.anchor_offset(*align);
                let tr = *transform * Affine::translate((anchor.x + dx, anchor.y + dy));
                let font_data = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(font.0.bytes.as_ref().clone()),
                    0,
                );
                ctx.set_transform(affine_to_cpu(tr));
                for line in shaped.layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));
                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(&font_data)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                Ok(())
            }
            DrawOp::Image {
                image,
                origin,
                transform,
            } => {
                let paint = image_paint(image)?;
                ctx.set_transform(affine_to_cpu(
                    *transform * Affine::translate((origin.x, origin.y)),
                ));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(image.width),
                    f64::from(image.height),
                ));
                Ok(())
            }
        }
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, plan), fields(width = plan.width, height = plan.height, ops = plan.ops.len()))]
    fn render_plan(&mut self, plan: &FramePlan) -> ProcResult<FrameRGBA> {
        let width: u16 = plan
            .width
            .try_into()
            .map_err(|_| ProcError::render("frame width exceeds u16"))?;
        let height: u16 = plan
            .height
            .try_into()
            .map_err(|_| ProcError::render("frame height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(ProcError::render("frame must not be empty"));
        }

        // Only ops after the last clear are visible.
        let start = plan
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear { .. }));
        let base = match start.map(|i| &plan.ops[i]) {
            Some(DrawOp::Clear { color }) => Some(color.to_array()),
            _ => self.opts.clear_rgba,
        };
        let visible = &plan.ops[start.map_or(0, |i| i + 1)..];

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        let mut ctx = self.take_ctx(width, height);
        let mut result = Ok(());
        for op in visible {
            result = self.draw_op(op, &mut ctx);
            if result.is_err() {
                break;
            }
        }
        if result.is_ok() {
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
        }
        self.ctx = Some(ctx);
        result?;

        let mut data = pixmap.data_as_u8_slice().to_vec();
        if let Some([r, g, b, a]) = base {
            let bg = Rgba8Premul::from_straight_rgba(r, g, b, a);
            underlay(&mut data, [bg.r, bg.g, bg.b, bg.a]);
        }
        tracing::debug!(ops = visible.len(), "rendered frame");

        Ok(FrameRGBA {
            width: plan.width,
            height: plan.height,
            data,
            premultiplied: true,
        })
    }
}

fn solid(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

/// Composite `bg` underneath premultiplied `data` (dst = src + bg * (1 - src.a)).
fn underlay(data: &mut [u8], bg: [u8; 4]) {
    if bg[3] == 0 {
        return;
    }
    for px in data.chunks_exact_mut(4) {
        let inv = 255 - u16::from(px[3]);
        for (c, b) in px.iter_mut().zip(bg) {
            let v = u16::from(*c) + ((u16::from(b) * inv + 127) / 255);
            *c = v.min(255) as u8;
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_paint(image: &PreparedImage) -> ProcResult<vello_cpu::Image> {
    let w: u16 = image
        .width
        .try_into()
        .map_err(|_| ProcError::render("image width exceeds u16"))?;
    let h: u16 = image
        .height
        .try_into()
        .map_err(|_| ProcError::render("image height exceeds u16"))?;
    let expected = (image.width as usize)
        .saturating_mul(image.height as usize)
        .saturating_mul(4);
    if image.rgba8_premul.len() != expected {
        return Err(ProcError::render("image byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let pixels = image
        .rgba8_premul
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
