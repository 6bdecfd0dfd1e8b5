// Keycanon Pointing Buttons
// Pointing-device button bit patterns and snapshot edge detection

use std::fmt;
use std::ops::{BitOr, Not};

use strum_macros::{Display, EnumString};

/// One pointing-device button with a fixed single-bit pattern.
///
/// Unlike modifier flags, button bits are disjoint, so `Buttons::remove`
/// needs no overlap repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum PointingButton {
    #[strum(serialize = "LEFT")]
    Left,
    #[strum(serialize = "RIGHT")]
    Right,
    #[strum(serialize = "MIDDLE")]
    Middle,
    #[strum(serialize = "BUTTON4")]
    Button4,
    #[strum(serialize = "BUTTON5")]
    Button5,
    #[strum(serialize = "BUTTON6")]
    Button6,
    #[strum(serialize = "BUTTON7")]
    Button7,
    #[strum(serialize = "BUTTON8")]
    Button8,
    /// Sentinel; terminal entry of `POINTING_BUTTON_TABLE`.
    #[strum(serialize = "NONE")]
    None,
}

/// The fixed, ordered table of pointing buttons, NONE last.
pub const POINTING_BUTTON_TABLE: [PointingButton; 9] = [
    PointingButton::Left,
    PointingButton::Right,
    PointingButton::Middle,
    PointingButton::Button4,
    PointingButton::Button5,
    PointingButton::Button6,
    PointingButton::Button7,
    PointingButton::Button8,
    PointingButton::None,
];

impl PointingButton {
    /// Raw bit pattern for this button.
    pub const fn bits(self) -> u32 {
        match self {
            PointingButton::Left => 0x0000_0001,
            PointingButton::Right => 0x0000_0002,
            PointingButton::Middle => 0x0000_0004,
            PointingButton::Button4 => 0x0000_0008,
            PointingButton::Button5 => 0x0000_0010,
            PointingButton::Button6 => 0x0000_0020,
            PointingButton::Button7 => 0x0000_0040,
            PointingButton::Button8 => 0x0000_0080,
            PointingButton::None => 0x0000_0000,
        }
    }
}

impl Not for PointingButton {
    type Output = u32;

    fn not(self) -> u32 {
        !self.bits()
    }
}

/// A bitmask of currently held pointing buttons.
///
/// One snapshot exists per polling cycle; edge detection compares the
/// current snapshot against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Buttons(u32);

impl Buttons {
    /// Wrap a raw hardware button mask.
    pub const fn new(raw: u32) -> Self {
        Buttons(raw)
    }

    /// The raw bitmask value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Bitwise union with the given buttons.
    #[must_use]
    pub fn add(self, buttons: impl Into<Buttons>) -> Buttons {
        Buttons(self.0 | buttons.into().0)
    }

    /// Clear the given buttons. Button bits are disjoint, so a plain
    /// clear is exact.
    #[must_use]
    pub fn remove(self, buttons: impl Into<Buttons>) -> Buttons {
        Buttons(self.0 & !buttons.into().0)
    }

    /// True if no button is held.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Containment test: every requested bit must be set.
    pub const fn is_on(self, buttons: Buttons) -> bool {
        (self.0 & buttons.0) == buttons.0
    }

    /// Buttons held now that were not held in `previous`.
    pub const fn just_pressed(self, previous: Buttons) -> Buttons {
        Buttons(self.0 & !previous.0)
    }

    /// Buttons held in `previous` that are no longer held now.
    pub const fn just_released(self, previous: Buttons) -> Buttons {
        Buttons(!self.0 & previous.0)
    }

    /// Number of buttons held; used for multi-button chord detection.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl From<PointingButton> for Buttons {
    fn from(button: PointingButton) -> Self {
        Buttons(button.bits())
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, other: Buttons) -> Buttons {
        Buttons(self.0 | other.0)
    }
}

impl BitOr<PointingButton> for Buttons {
    type Output = Buttons;

    fn bitor(self, other: PointingButton) -> Buttons {
        Buttons(self.0 | other.bits())
    }
}

impl BitOr for PointingButton {
    type Output = Buttons;

    fn bitor(self, other: PointingButton) -> Buttons {
        Buttons(self.bits() | other.bits())
    }
}

impl Not for Buttons {
    type Output = Buttons;

    fn not(self) -> Buttons {
        Buttons(!self.0)
    }
}

impl fmt::Display for Buttons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for button in POINTING_BUTTON_TABLE {
            if button == PointingButton::None {
                break;
            }
            if self.is_on(Buttons::from(button)) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", button)?;
                first = false;
            }
        }
        if first {
            write!(f, "(none)")?;
        }
        Ok(())
    }
}
