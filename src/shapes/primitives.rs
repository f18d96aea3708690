//! Shape constructors built on the path builder.
//!
//! Positions are logical; sizes are mapped per axis. Angles are radians and
//! positive angles turn counter-clockwise on screen.

use std::f64::consts::TAU;

use crate::canvas::mapping::Axis;
use crate::foundation::core::{Point, Vec2};
use crate::path::segment::Segment;
use crate::proc::processor::Proc;

/// Foci of an axis-aligned ellipse with device semi-axes `rx`, `ry` around `c`.
pub(crate) fn ellipse_foci(c: Point, rx: f64, ry: f64) -> (Point, Point) {
    if rx > ry {
        let e = (rx * rx - ry * ry).sqrt();
        (c + Vec2::new(e, 0.0), c - Vec2::new(e, 0.0))
    } else {
        let e = (ry * ry - rx * rx).sqrt();
        (c + Vec2::new(0.0, e), c - Vec2::new(0.0, e))
    }
}

impl Proc {
    /// Ellipse centered at `(x, y)` with width `w` and height `h`.
    pub fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if !self.fill_active() && !self.stroke_active() {
            return;
        }
        let c = self.pt(x, y);
        let rx = self.device_len(Axis::X, 0.5 * w);
        let ry = self.device_len(Axis::Y, 0.5 * h);
        let (f1, f2) = ellipse_foci(c, rx, ry);

        let mut path = self.begin_path();
        path.push_segment(Segment::MoveTo(c - Vec2::new(rx, 0.0)));
        path.push_segment(Segment::ArcTo {
            f1,
            f2,
            sweep: -TAU,
        });
        path.push_segment(Segment::Close);
        path.end();
    }

    /// Circle centered at `(x, y)` with diameter `d`.
    pub fn circle(&mut self, x: f64, y: f64, d: f64) {
        self.ellipse(x, y, d, d);
    }

    /// Stroked elliptical arc centered at `(x, y)` from angle `beg` to `end`.
    pub fn arc(&mut self, x: f64, y: f64, w: f64, h: f64, beg: f64, end: f64) {
        if !self.stroke_active() {
            return;
        }
        let c = self.pt(x, y);
        let rx = self.device_len(Axis::X, 0.5 * w);
        let ry = self.device_len(Axis::Y, 0.5 * h);
        let (f1, f2) = ellipse_foci(c, rx, ry);
        let (sin, cos) = beg.sin_cos();
        // Device y grows downward.
        let p0 = c + Vec2::new(rx * cos, -ry * sin);

        let mut path = self.begin_path();
        path.push_segment(Segment::MoveTo(p0));
        path.push_segment(Segment::ArcTo {
            f1,
            f2,
            sweep: -(end - beg),
        });
        path.end_stroke();
    }

    /// Stroked line from `(x1, y1)` to `(x2, y2)`.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if !self.stroke_active() {
            return;
        }
        let mut path = self.begin_path();
        path.vertex(x1, y1).vertex(x2, y2);
        path.end_stroke();
    }

    /// Quadrilateral through four points.
    #[allow(clippy::too_many_arguments)]
    pub fn quad(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) {
        self.polygon(&[(x1, y1), (x2, y2), (x3, y3), (x4, y4), (x1, y1)]);
    }

    /// Rectangle with top-left corner `(x, y)`.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.quad(x, y, x + w, y, x + w, y + h, x, y + h);
    }

    /// Square with top-left corner `(x, y)`.
    pub fn square(&mut self, x: f64, y: f64, s: f64) {
        self.rect(x, y, s, s);
    }

    /// Triangle through three points.
    pub fn triangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.polygon(&[(x1, y1), (x2, y2), (x3, y3), (x1, y1)]);
    }

    /// Polyline through `pts`.
    ///
    /// When the last point repeats the first, the path is closed instead of
    /// drawing the final edge; otherwise it stays open.
    pub fn polygon(&mut self, pts: &[(f64, f64)]) {
        if !self.fill_active() && !self.stroke_active() {
            return;
        }
        let Some((&first, rest)) = pts.split_first() else {
            return;
        };
        let closes = rest.len() > 1 && rest.last() == Some(&first);
        let body = if closes { &rest[..rest.len() - 1] } else { rest };

        let mut path = self.begin_path();
        path.vertex(first.0, first.1);
        for &(x, y) in body {
            path.vertex(x, y);
        }
        if closes {
            path.close();
        }
        path.end();
    }

    /// Stroked cubic Bézier from point 1 to point 4 with controls 2 and 3.
    #[allow(clippy::too_many_arguments)]
    pub fn bezier(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        x4: f64,
        y4: f64,
    ) {
        if !self.stroke_active() {
            return;
        }
        let mut path = self.begin_path();
        path.vertex(x1, y1).cubic_to(x2, y2, x3, y3, x4, y4);
        path.end_stroke();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/primitives.rs"]
mod tests;
