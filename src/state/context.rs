use crate::foundation::core::Color;
use crate::text::FontId;

/// Stroke end cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StrokeCap {
    /// Flat cap at the endpoint.
    #[default]
    Flat,
    /// Square cap extending half the width past the endpoint.
    Square,
    /// Rounded cap.
    Round,
}

/// Stroke corner join.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StrokeJoin {
    /// Flat corner.
    #[default]
    Bevel,
    /// Rounded corner.
    Round,
    /// Sharp corner up to the miter limit.
    Miter,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAlign {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    End,
}

/// Dash pattern in device pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dash {
    /// Distance into the pattern at which stroking starts.
    pub offset: f64,
    /// Alternating on/off lengths.
    pub pattern: Vec<f64>,
}

/// Stroke attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint, `None` disables stroking.
    pub color: Option<Color>,
    /// Width in device pixels.
    pub width: f64,
    /// End cap.
    pub cap: StrokeCap,
    /// Corner join.
    pub join: StrokeJoin,
    /// Optional dash pattern.
    pub dash: Option<Dash>,
}

impl StrokeStyle {
    /// Whether strokes currently paint anything.
    pub fn is_active(&self) -> bool {
        self.color.is_some() && self.width > 0.0
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Some(Color::BLACK),
            width: 2.0,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
            dash: None,
        }
    }
}

/// Text attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Glyph paint.
    pub color: Color,
    /// Alignment relative to the anchor.
    pub align: TextAlign,
    /// Font size in device pixels.
    pub size: f64,
    /// Selected font, `None` uses the first loaded one.
    pub font: Option<FontId>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            align: TextAlign::Start,
            size: 12.0,
            font: None,
        }
    }
}

/// One snapshot of drawing attributes.
///
/// Plain value type: pushing a frame clones it, popping drops it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicsContext {
    /// Color painted by `background`.
    pub background: Color,
    /// Fill paint, `None` disables filling.
    pub fill: Option<Color>,
    /// Stroke attributes.
    pub stroke: StrokeStyle,
    /// Text attributes.
    pub text: TextStyle,
    /// Catmull-Rom tension for `curve`.
    pub curve_tension: f64,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            fill: Some(Color::WHITE),
            stroke: StrokeStyle::default(),
            text: TextStyle::default(),
            curve_tension: 0.0,
        }
    }
}

impl GraphicsContext {
    /// Whether fills currently paint anything.
    pub fn fill_active(&self) -> bool {
        self.fill.is_some()
    }
}
