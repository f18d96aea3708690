use crate::foundation::core::Affine;
use crate::state::context::GraphicsContext;
use crate::transform::affine::compose;

/// One saved level: attributes plus the device transform active at that level.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Frame {
    pub(crate) ctx: GraphicsContext,
    pub(crate) transform: Affine,
}

/// Save/restore stack of graphics state.
///
/// Never empty: index 0 is the root frame and cannot be popped.
#[derive(Clone, Debug)]
pub(crate) struct StateStack {
    frames: Vec<Frame>,
}

impl StateStack {
    pub(crate) fn new(root: GraphicsContext) -> Self {
        Self {
            frames: vec![Frame {
                ctx: root,
                transform: Affine::IDENTITY,
            }],
        }
    }

    pub(crate) fn push(&mut self) {
        let top = self.current().clone();
        self.frames.push(top);
    }

    /// Drop the top frame.
    ///
    /// # Panics
    /// Popping the root frame is a usage error.
    pub(crate) fn pop(&mut self) {
        assert!(
            self.frames.len() > 1,
            "pop without matching push: the root graphics state cannot be popped"
        );
        self.frames.pop();
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    pub(crate) fn current(&self) -> &Frame {
        // Root frame is never removed.
        &self.frames[self.frames.len() - 1]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub(crate) fn ctx(&self) -> &GraphicsContext {
        &self.current().ctx
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut GraphicsContext {
        &mut self.current_mut().ctx
    }

    pub(crate) fn transform(&self) -> Affine {
        self.current().transform
    }

    /// Post-multiply `op` onto the current frame's transform.
    pub(crate) fn apply(&mut self, op: Affine) {
        let frame = self.current_mut();
        frame.transform = compose(frame.transform, op);
    }

    pub(crate) fn set_transform(&mut self, t: Affine) {
        self.current_mut().transform = t;
    }

    /// Restore the root frame to `root`, dropping every pushed frame.
    pub(crate) fn reset(&mut self, root: GraphicsContext) {
        self.frames.truncate(1);
        self.frames[0] = Frame {
            ctx: root,
            transform: Affine::IDENTITY,
        };
    }

    /// Reset only the transforms, keeping attributes (start of a frame).
    pub(crate) fn reset_transform(&mut self) {
        self.frames[0].transform = Affine::IDENTITY;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/stack.rs"]
mod tests;
