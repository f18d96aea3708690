use kurbo::{Cap, Join, PathEl, Stroke, StrokeOpts};

use crate::foundation::core::{BezPath, Point};
use crate::path::segment::{Segment, append_arc};
use crate::state::context::{StrokeCap, StrokeJoin, StrokeStyle};

/// Tolerance for stroke expansion, in device pixels.
const STROKE_TOLERANCE: f64 = 0.1;

/// Convert segments to a Bézier path.
///
/// A path that does not begin with a move starts at the device origin.
pub(crate) fn to_bezpath(segs: &[Segment]) -> BezPath {
    let mut path = BezPath::new();
    let mut pen = Point::ZERO;
    let mut start = Point::ZERO;
    let mut open = false;

    for seg in segs {
        if !open && !matches!(seg, Segment::MoveTo(_)) {
            path.move_to(pen);
            start = pen;
            open = true;
        }
        match *seg {
            Segment::MoveTo(p) => {
                path.move_to(p);
                pen = p;
                start = p;
                open = true;
            }
            Segment::LineTo(p) => {
                path.line_to(p);
                pen = p;
            }
            Segment::QuadTo(c, p) => {
                path.quad_to(c, p);
                pen = p;
            }
            Segment::CubeTo(c1, c2, p) => {
                path.curve_to(c1, c2, p);
                pen = p;
            }
            Segment::ArcTo { f1, f2, sweep } => {
                pen = append_arc(&mut path, pen, f1, f2, sweep);
            }
            Segment::Close => {
                path.close_path();
                pen = start;
                open = false;
            }
        }
    }
    path
}

/// Outline used for filling: every subpath is closed.
pub(crate) fn fill_outline(segs: &[Segment]) -> BezPath {
    let mut closed = BezPath::new();
    let mut open = false;
    for el in to_bezpath(segs).elements().iter().copied() {
        match el {
            PathEl::MoveTo(_) if open => {
                closed.close_path();
                closed.push(el);
            }
            PathEl::MoveTo(_) => {
                closed.push(el);
                open = true;
            }
            PathEl::ClosePath => {
                closed.push(el);
                open = false;
            }
            _ => closed.push(el),
        }
    }
    if open {
        closed.close_path();
    }
    closed
}

/// Outline of the stroke of `segs`, ready to be filled.
pub(crate) fn stroke_outline(segs: &[Segment], style: &StrokeStyle) -> BezPath {
    let path = to_bezpath(segs);
    kurbo::stroke(
        path.elements().iter().copied(),
        &kurbo_stroke(style),
        &StrokeOpts::default(),
        STROKE_TOLERANCE,
    )
}

fn kurbo_stroke(style: &StrokeStyle) -> Stroke {
    let cap = match style.cap {
        StrokeCap::Flat => Cap::Butt,
        StrokeCap::Square => Cap::Square,
        StrokeCap::Round => Cap::Round,
    };
    let join = match style.join {
        StrokeJoin::Bevel => Join::Bevel,
        StrokeJoin::Round => Join::Round,
        StrokeJoin::Miter => Join::Miter,
    };
    let stroke = Stroke::new(style.width).with_caps(cap).with_join(join);
    match &style.dash {
        Some(dash) if dash.pattern.iter().any(|v| *v > 0.0) => {
            stroke.with_dashes(dash.offset, dash.pattern.iter().copied())
        }
        _ => stroke,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/outline.rs"]
mod tests;
