//! Input events delivered by a host and the per-tick snapshot sketches read.

use std::collections::BTreeSet;

use crate::foundation::core::Point;

/// Pointer buttons held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buttons(u8);

impl Buttons {
    /// No button.
    pub const NONE: Buttons = Buttons(0);
    /// Primary (left) button.
    pub const LEFT: Buttons = Buttons(1 << 0);
    /// Secondary (right) button.
    pub const RIGHT: Buttons = Buttons(1 << 1);
    /// Tertiary (middle) button.
    pub const MIDDLE: Buttons = Buttons(1 << 2);

    /// Whether every button in `other` is held.
    pub fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no button is held.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bits.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// What happened to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// A button went down.
    Press,
    /// A button went up.
    Release,
    /// The pointer moved.
    Move,
}

/// A pointer event in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event kind.
    pub kind: PointerKind,
    /// Pointer position in device pixels.
    pub position: Point,
    /// Buttons held after the event.
    pub buttons: Buttons,
}

/// Whether a key went down or up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    /// Key pressed.
    Press,
    /// Key released.
    Release,
}

/// A keyboard event.
///
/// Names follow the host's key naming (`"A"`, `"Space"`, `"Escape"`...); the driver
/// treats [`KeyEvent::ESCAPE`] and [`KeyEvent::F11`] specially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key name.
    pub name: String,
    /// Press or release.
    pub state: KeyState,
}

impl KeyEvent {
    /// Name of the Escape key.
    pub const ESCAPE: &'static str = "Escape";
    /// Name of the F11 key.
    pub const F11: &'static str = "F11";

    /// Key press.
    pub fn press(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: KeyState::Press,
        }
    }

    /// Key release.
    pub fn release(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: KeyState::Release,
        }
    }
}

/// Everything a host can deliver to the frame driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Pointer activity.
    Pointer(PointerEvent),
    /// Keyboard activity.
    Key(KeyEvent),
    /// A new frame should be produced.
    FrameTick,
    /// The surface changed size; counts as a tick.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// The host is going away.
    Destroy,
}

/// Mouse state, in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseState {
    /// Whether a button is currently pressed.
    pub pressed: bool,
    /// Position before the last move.
    pub prev_position: Point,
    /// Latest position.
    pub position: Point,
    /// Buttons held during the latest pointer event.
    pub buttons: Buttons,
}

/// Keyboard state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    /// Latest key event.
    pub current: Option<KeyEvent>,
    /// Key event before `current`.
    pub previous: Option<KeyEvent>,
    /// Keys currently held down.
    pub down: BTreeSet<String>,
}

impl KeyboardState {
    /// Whether any key is held.
    pub fn is_pressed(&self) -> bool {
        !self.down.is_empty()
    }
}

/// Input state as of the start of the current draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventSnapshot {
    /// Mouse state.
    pub mouse: MouseState,
    /// Keyboard state.
    pub key: KeyboardState,
}

impl EventSnapshot {
    /// Fold one pointer event into the snapshot.
    pub fn apply_pointer(&mut self, e: &PointerEvent) {
        match e.kind {
            PointerKind::Press => self.mouse.pressed = true,
            PointerKind::Release => self.mouse.pressed = false,
            PointerKind::Move => {
                self.mouse.prev_position = self.mouse.position;
                self.mouse.position = e.position;
            }
        }
        self.mouse.buttons = e.buttons;
    }

    /// Fold one key event into the snapshot.
    pub fn apply_key(&mut self, e: &KeyEvent) {
        match e.state {
            KeyState::Press => {
                self.key.down.insert(e.name.clone());
            }
            KeyState::Release => {
                self.key.down.remove(&e.name);
            }
        }
        self.key.previous = self.key.current.replace(e.clone());
    }

    /// Whether `name` is currently held down.
    pub fn key_is_down(&self, name: &str) -> bool {
        self.key.down.contains(name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/event/input.rs"]
mod tests;
