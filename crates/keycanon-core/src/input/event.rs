// Keycanon Input Layer - Event Shapes
// Raw and canonical event representations consumed by the pipeline

use std::fmt;

use crate::button::Buttons;
use crate::modifier::Flags;
use crate::{KeyCode, KeyboardType};

/// Classification of a key event.
///
/// From the event tap, the "magic numbers" for assignment to enums:
///   0 == key up
///   1 == key down
///   2 == modifier state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum EventType {
    Up = 0,
    Down = 1,
    Modify = 2,
}

impl EventType {
    /// Returns true for key-down events (including hardware key repeat,
    /// which arrives as another down)
    pub fn is_down(self) -> bool {
        matches!(self, EventType::Down)
    }

    /// Returns true for key-up events
    pub fn is_up(self) -> bool {
        matches!(self, EventType::Up)
    }

    /// Returns true if this event presses the given key: a plain key
    /// down, or a modifier state change whose flags contain the key's
    /// modifier flag.
    pub fn is_key_down_or_modifier_down(self, key: KeyCode, flags: Flags) -> bool {
        match self {
            EventType::Down => true,
            EventType::Modify => flags.is_on(key.modifier_flag()),
            EventType::Up => false,
        }
    }

    /// Create EventType from u32 value (from the event tap)
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(EventType::Up),
            1 => Some(EventType::Down),
            2 => Some(EventType::Modify),
            _ => None,
        }
    }

    /// Convert EventType to its u32 representation
    pub fn to_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Up => write!(f, "UP"),
            EventType::Down => write!(f, "DOWN"),
            EventType::Modify => write!(f, "MODIFY"),
        }
    }
}

/// A key event as delivered by the event tap (raw) or handed to the
/// policy engine (canonical). The shape is identical; only the key and
/// flags values change across normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub flags: Flags,
    pub event_type: EventType,
    pub keyboard_type: KeyboardType,
}

impl KeyEvent {
    pub fn new(
        key: KeyCode,
        flags: Flags,
        event_type: EventType,
        keyboard_type: KeyboardType,
    ) -> Self {
        Self {
            key,
            flags,
            event_type,
            keyboard_type,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] ({})",
            self.event_type, self.key, self.flags, self.keyboard_type
        )
    }
}

/// A pointing event: the current button snapshot plus the previous one.
///
/// The previous snapshot is owned by the event source; this core only
/// compares the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointingEvent {
    pub buttons: Buttons,
    pub previous: Buttons,
}

impl PointingEvent {
    pub fn new(buttons: Buttons, previous: Buttons) -> Self {
        Self { buttons, previous }
    }

    /// Buttons that went down between the two snapshots.
    pub fn just_pressed(&self) -> Buttons {
        self.buttons.just_pressed(self.previous)
    }

    /// Buttons that went up between the two snapshots.
    pub fn just_released(&self) -> Buttons {
        self.buttons.just_released(self.previous)
    }

    /// Number of buttons currently held.
    pub fn chord_size(&self) -> u32 {
        self.buttons.count()
    }
}
