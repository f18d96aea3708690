use crate::foundation::core::{BezPath, Point, Vec2};

/// Flattening tolerance (device pixels) used when expanding arcs to cubics.
pub(crate) const ARC_TOLERANCE: f64 = 0.1;

/// One path instruction, with every point already in device space.
///
/// Arcs are described by the two foci of their ellipse and a sweep; the start
/// point is wherever the pen is when the arc begins. Sweep angles follow the
/// device axes (y down), so positive sweeps turn clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight line to a point.
    LineTo(Point),
    /// Quadratic Bézier with one control point.
    QuadTo(Point, Point),
    /// Cubic Bézier with two control points.
    CubeTo(Point, Point, Point),
    /// Elliptical arc around the given foci.
    ArcTo {
        /// First focus.
        f1: Point,
        /// Second focus.
        f2: Point,
        /// Sweep in radians.
        sweep: f64,
    },
    /// Close the current subpath.
    Close,
}

impl Segment {
    /// End point of the segment, if it moves the pen to a fixed location.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => Some(p),
            Segment::QuadTo(_, p) | Segment::CubeTo(_, _, p) => Some(p),
            Segment::ArcTo { .. } | Segment::Close => None,
        }
    }
}

/// Ellipse parameters recovered from a start point and two foci.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FocalEllipse {
    pub(crate) center: Point,
    pub(crate) radii: Vec2,
    pub(crate) rotation: f64,
    pub(crate) start_angle: f64,
}

impl FocalEllipse {
    /// Ellipse through `start` with foci `f1`, `f2`; `None` when it degenerates to a point.
    pub(crate) fn through(start: Point, f1: Point, f2: Point) -> Option<Self> {
        let center = f1.midpoint(f2);
        let axis = f1 - f2;
        let c = axis.hypot() * 0.5;
        let a = ((start - f1).hypot() + (start - f2).hypot()) * 0.5;
        if !a.is_finite() || a <= 0.0 {
            return None;
        }
        let b = (a * a - c * c).max(0.0).sqrt();
        let rotation = if c > 0.0 { axis.y.atan2(axis.x) } else { 0.0 };

        let (sin, cos) = (-rotation).sin_cos();
        let d = start - center;
        let local = Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos);
        // Parametric angle: local = (a cos t, b sin t).
        let start_angle = (local.y * a).atan2(local.x * b);

        Some(Self {
            center,
            radii: Vec2::new(a, b),
            rotation,
            start_angle,
        })
    }

    pub(crate) fn arc(&self, sweep: f64) -> kurbo::Arc {
        kurbo::Arc {
            center: self.center,
            radii: self.radii,
            start_angle: self.start_angle,
            sweep_angle: sweep,
            x_rotation: self.rotation,
        }
    }
}

/// Append an arc from the current pen position; returns the new pen position.
pub(crate) fn append_arc(path: &mut BezPath, pen: Point, f1: Point, f2: Point, sweep: f64) -> Point {
    let Some(ellipse) = FocalEllipse::through(pen, f1, f2) else {
        return pen;
    };
    let arc = ellipse.arc(sweep);
    let mut end = pen;
    for el in arc.append_iter(ARC_TOLERANCE) {
        if let Some(p) = el.end_point() {
            end = p;
        }
        path.push(el);
    }
    end
}

#[cfg(test)]
#[path = "../../tests/unit/path/segment.rs"]
mod tests;
