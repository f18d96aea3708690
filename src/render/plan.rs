use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Affine, BezPath, Color, Point};
use crate::state::context::TextAlign;
use crate::text::font::LoadedFont;

/// One recorded paint operation.
///
/// Geometry is in device pixels before `transform` is applied.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Replace every pixel with `color`.
    Clear {
        /// Clear color.
        color: Color,
    },
    /// Fill an outline with a solid color (non-zero winding).
    Fill {
        /// Closed outline.
        outline: BezPath,
        /// Device transform active when the shape was drawn.
        transform: Affine,
        /// Paint.
        color: Color,
    },
    /// A stroke, already expanded to an outline and filled like [`DrawOp::Fill`].
    Stroke {
        /// Expanded stroke outline.
        outline: BezPath,
        /// Device transform active when the shape was drawn.
        transform: Affine,
        /// Paint.
        color: Color,
    },
    /// A line of text anchored at its baseline.
    Text {
        /// UTF-8 text.
        text: String,
        /// Font used for shaping.
        font: TextFont,
        /// Font size in pixels.
        size: f64,
        /// Glyph paint.
        color: Color,
        /// Horizontal alignment relative to `anchor`.
        align: TextAlign,
        /// Baseline anchor.
        anchor: Point,
        /// Device transform active when the text was drawn.
        transform: Affine,
    },
    /// A raster image with its top-left corner at `origin`.
    Image {
        /// Decoded pixels.
        image: PreparedImage,
        /// Top-left corner.
        origin: Point,
        /// Device transform active when the image was drawn.
        transform: Affine,
    },
}

/// Font handle carried by text ops.
#[derive(Clone, Debug)]
pub struct TextFont(pub(crate) Arc<LoadedFont>);

impl TextFont {
    /// Family name the font registered under.
    pub fn family(&self) -> &str {
        &self.0.family
    }
}

/// Everything drawn during one frame, in paint order.
#[derive(Clone, Debug, Default)]
pub struct FramePlan {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Ops in paint order.
    pub ops: Vec<DrawOp>,
}

impl FramePlan {
    /// Empty plan for a `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Number of recorded ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Colors of the fill ops, in paint order.
    pub fn fill_colors(&self) -> Vec<Color> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Colors of the stroke ops, in paint order.
    pub fn stroke_colors(&self) -> Vec<Color> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }
}
