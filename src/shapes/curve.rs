use crate::proc::processor::Proc;

/// Cubic Bézier control points equivalent to the Catmull-Rom segment between
/// `p[1]` and `p[2]` at tension `tau`.
///
/// Undefined for `tau == 1`; callers draw a straight line in that case.
pub(crate) fn catmull_rom_to_bezier(p: [(f64, f64); 4], tau: f64) -> [(f64, f64); 4] {
    let itau = 1.0 / (6.0 * (1.0 - tau));
    let [cr1, cr2, cr3, cr4] = p;
    [
        cr2,
        (cr2.0 + (cr3.0 - cr1.0) * itau, cr2.1 + (cr3.1 - cr1.1) * itau),
        (cr3.0 - (cr4.0 - cr2.0) * itau, cr3.1 - (cr4.1 - cr2.1) * itau),
        cr3,
    ]
}

impl Proc {
    /// Catmull-Rom segment from point 2 to point 3; points 1 and 4 shape the ends.
    ///
    /// Uses the tension set by [`Proc::curve_tightness`]. A tension of exactly 1
    /// draws a straight line.
    #[allow(clippy::too_many_arguments)]
    pub fn curve(
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
        let tau = self.context().curve_tension;
        if tau == 1.0 {
            self.line(x2, y2, x3, y3);
            return;
        }
        let [b1, b2, b3, b4] =
            catmull_rom_to_bezier([(x1, y1), (x2, y2), (x3, y3), (x4, y4)], tau);
        self.bezier(b1.0, b1.1, b2.0, b2.1, b3.0, b3.1, b4.0, b4.1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/curve.rs"]
mod tests;
