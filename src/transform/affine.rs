//! Transform operations composed onto the current graphics state.

use crate::canvas::mapping::{Axis, CoordinateMapping};
use crate::foundation::core::{Affine, Vec2};

/// One transform request, expressed in user terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Rotation in radians; positive turns counter-clockwise on screen.
    Rotate(f64),
    /// Non-uniform scale about the device origin.
    Scale(f64, f64),
    /// Translation by a logical distance.
    Translate(f64, f64),
    /// Shear by angles (radians) along x and y.
    Shear(f64, f64),
    /// Raw affine coefficients `[a b c d e f]`, canvas-style:
    /// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
    Matrix([f64; 6]),
}

impl TransformOp {
    /// Device-space affine for this op under `mapping`.
    pub fn to_affine(self, mapping: &CoordinateMapping) -> Affine {
        match self {
            // Device Y grows downward.
            TransformOp::Rotate(theta) => Affine::rotate(-theta),
            TransformOp::Scale(sx, sy) => Affine::scale_non_uniform(sx, sy),
            TransformOp::Translate(tx, ty) => Affine::translate(Vec2::new(
                mapping.length_to_device(Axis::X, tx),
                mapping.length_to_device(Axis::Y, ty),
            )),
            TransformOp::Shear(ax, ay) => Affine::new([1.0, ay.tan(), ax.tan(), 1.0, 0.0, 0.0]),
            TransformOp::Matrix(m) => Affine::new(m),
        }
    }
}

/// `current` followed by `op` (post-multiplied).
#[inline]
pub fn compose(current: Affine, op: Affine) -> Affine {
    current * op
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
