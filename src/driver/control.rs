use std::sync::RwLock;

#[derive(Clone, Copy, Debug)]
struct Flags {
    run: bool,
    looping: bool,
}

/// Run/loop flags shared between a `Proc`, its frame driver and the tick thread.
///
/// Read on every tick, written only by explicit user calls.
#[derive(Debug)]
pub struct Control {
    flags: RwLock<Flags>,
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

impl Control {
    /// Not running, looping enabled.
    pub fn new() -> Self {
        Self {
            flags: RwLock::new(Flags {
                run: false,
                looping: true,
            }),
        }
    }

    fn read(&self) -> Flags {
        // A poisoned lock still holds valid flags.
        match self.flags.read() {
            Ok(g) => *g,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn write(&self, f: impl FnOnce(&mut Flags)) {
        match self.flags.write() {
            Ok(mut g) => f(&mut g),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    /// Whether the frame loop is running.
    pub fn is_running(&self) -> bool {
        self.read().run
    }

    /// Whether ticks execute `draw`.
    pub fn is_looping(&self) -> bool {
        self.read().looping
    }

    pub(crate) fn set_running(&self, run: bool) {
        self.write(|f| f.run = run);
    }

    /// Enable or disable per-tick drawing.
    pub fn set_looping(&self, looping: bool) {
        self.write(|f| f.looping = looping);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/control.rs"]
mod tests;
