use crate::path::segment::Segment;
use crate::proc::processor::Proc;

/// A path under construction, in logical coordinates.
///
/// Obtained from [`Proc::begin_path`]; [`Path::end`] consumes it and paints it
/// with the fill and stroke current at that moment.
#[must_use = "a path is only drawn when `end` is called"]
pub struct Path<'a> {
    proc: &'a mut Proc,
    segs: Vec<Segment>,
    vtx: usize,
}

impl Proc {
    /// Start a new, empty path.
    pub fn begin_path(&mut self) -> Path<'_> {
        Path {
            proc: self,
            segs: Vec::new(),
            vtx: 0,
        }
    }
}

impl<'a> Path<'a> {
    /// Add an anchor point: the first one starts the path, later ones draw lines.
    pub fn vertex(&mut self, x: f64, y: f64) -> &mut Self {
        let p = self.proc.pt(x, y);
        self.segs.push(if self.vtx == 0 {
            Segment::MoveTo(p)
        } else {
            Segment::LineTo(p)
        });
        self.vtx += 1;
        self
    }

    /// Quadratic Bézier from the pen to `(x2, y2)` with control `(x1, y1)`.
    pub fn quadratic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        let c = self.proc.pt(x1, y1);
        let e = self.proc.pt(x2, y2);
        self.segs.push(Segment::QuadTo(c, e));
        self.vtx += 1;
        self
    }

    /// Cubic Bézier from the pen to `(x3, y3)` with controls `(x1, y1)` and `(x2, y2)`.
    pub fn cubic_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> &mut Self {
        let c1 = self.proc.pt(x1, y1);
        let c2 = self.proc.pt(x2, y2);
        let e = self.proc.pt(x3, y3);
        self.segs.push(Segment::CubeTo(c1, c2, e));
        self.vtx += 1;
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.segs.push(Segment::Close);
        self
    }

    /// Number of anchor points added so far.
    pub fn vertex_count(&self) -> usize {
        self.vtx
    }

    /// Segments recorded so far (device space).
    pub fn segments(&self) -> &[Segment] {
        &self.segs
    }

    pub(crate) fn push_segment(&mut self, seg: Segment) {
        self.segs.push(seg);
    }

    /// Paint the path with the current fill (outline auto-closed) and stroke.
    pub fn end(self) {
        self.proc.paint_segments(&self.segs);
    }

    /// Paint the path with the current stroke only.
    pub(crate) fn end_stroke(self) {
        self.proc.stroke_segments(&self.segs);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/builder.rs"]
mod tests;
