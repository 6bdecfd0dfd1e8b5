// Keycanon Modifier System
// Named modifier flag bit patterns and the Flags bitmask algebra

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use smallvec::SmallVec;
use strum_macros::{Display, EnumString};

use crate::KeyCode;

/// One named modifier key role with a fixed bit pattern.
///
/// The bit patterns are deliberately not disjoint: each left/right pair
/// shares a generic bit in addition to its side-specific bit. ShiftL is
/// 0x20002 and ShiftR is 0x20004, so both contain the generic shift bit
/// 0x20000. `Flags::remove` relies on the fixed table below to repair
/// that shared bit when only one side is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ModifierFlag {
    #[strum(serialize = "CAPSLOCK")]
    Capslock,
    #[strum(serialize = "SHIFT_L")]
    ShiftL,
    #[strum(serialize = "SHIFT_R")]
    ShiftR,
    #[strum(serialize = "CONTROL_L")]
    ControlL,
    #[strum(serialize = "CONTROL_R")]
    ControlR,
    #[strum(serialize = "OPTION_L")]
    OptionL,
    #[strum(serialize = "OPTION_R")]
    OptionR,
    #[strum(serialize = "COMMAND_L")]
    CommandL,
    #[strum(serialize = "COMMAND_R")]
    CommandR,
    /// Cursor-cluster flag. The hardware uses the same bit for the
    /// numeric keypad; see [`ModifierFlag::KEYPAD`].
    #[strum(to_string = "CURSOR", serialize = "KEYPAD")]
    Cursor,
    #[strum(serialize = "FN")]
    Fn,
    #[strum(serialize = "EXTRA1")]
    Extra1,
    #[strum(serialize = "EXTRA2")]
    Extra2,
    #[strum(serialize = "EXTRA3")]
    Extra3,
    #[strum(serialize = "EXTRA4")]
    Extra4,
    #[strum(serialize = "EXTRA5")]
    Extra5,
    /// Sentinel flag. Must stay the last entry of `MODIFIER_FLAG_TABLE`;
    /// table scans terminate on it.
    #[strum(serialize = "NONE")]
    None,
}

/// The fixed, ordered table of named modifier flags.
///
/// KEYPAD is skipped because it is the same bit value as CURSOR.
/// `ModifierFlag::None` is the terminal entry; `Flags::remove` and the
/// virtual-modifier scan iterate exactly this sequence.
pub const MODIFIER_FLAG_TABLE: [ModifierFlag; 17] = [
    ModifierFlag::Capslock,
    ModifierFlag::ShiftL,
    ModifierFlag::ShiftR,
    ModifierFlag::ControlL,
    ModifierFlag::ControlR,
    ModifierFlag::OptionL,
    ModifierFlag::OptionR,
    ModifierFlag::CommandL,
    ModifierFlag::CommandR,
    ModifierFlag::Cursor,
    ModifierFlag::Fn,
    ModifierFlag::Extra1,
    ModifierFlag::Extra2,
    ModifierFlag::Extra3,
    ModifierFlag::Extra4,
    ModifierFlag::Extra5,
    ModifierFlag::None,
];

/// Look up a modifier flag by its dense table index.
///
/// Returns `ModifierFlag::None` once the index range is exhausted, so
/// callers can iterate with a plain counter and stop on `None`.
pub fn modifier_flag_by_index(index: usize) -> ModifierFlag {
    MODIFIER_FLAG_TABLE
        .get(index)
        .copied()
        .unwrap_or(ModifierFlag::None)
}

impl ModifierFlag {
    /// Documented alias: the hardware reports the numeric keypad with the
    /// same bit as the cursor cluster.
    pub const KEYPAD: ModifierFlag = ModifierFlag::Cursor;

    /// Raw bit pattern for this flag.
    pub const fn bits(self) -> u32 {
        match self {
            ModifierFlag::Capslock => 0x0001_0000,
            ModifierFlag::ShiftL => 0x0002_0002,
            ModifierFlag::ShiftR => 0x0002_0004,
            ModifierFlag::ControlL => 0x0004_0001,
            ModifierFlag::ControlR => 0x0004_2000,
            ModifierFlag::OptionL => 0x0008_0020,
            ModifierFlag::OptionR => 0x0008_0040,
            ModifierFlag::CommandL => 0x0010_0008,
            ModifierFlag::CommandR => 0x0010_0010,
            ModifierFlag::Cursor => 0x0020_0000,
            ModifierFlag::Fn => 0x0080_0000,
            ModifierFlag::Extra1 => 0x0100_0000,
            ModifierFlag::Extra2 => 0x0200_0000,
            ModifierFlag::Extra3 => 0x0400_0000,
            ModifierFlag::Extra4 => 0x0800_0000,
            ModifierFlag::Extra5 => 0x1000_0000,
            ModifierFlag::None => 0x2000_0000,
        }
    }

    /// The key code that produces this modifier, if it is a physical key.
    ///
    /// Virtual flags (EXTRA1..EXTRA5, NONE) have no key code.
    pub const fn key_code(self) -> Option<KeyCode> {
        match self {
            ModifierFlag::Capslock => Some(KeyCode::CAPSLOCK),
            ModifierFlag::ShiftL => Some(KeyCode::LEFT_SHIFT),
            ModifierFlag::ShiftR => Some(KeyCode::RIGHT_SHIFT),
            ModifierFlag::ControlL => Some(KeyCode::LEFT_CTRL),
            ModifierFlag::ControlR => Some(KeyCode::RIGHT_CTRL),
            ModifierFlag::OptionL => Some(KeyCode::LEFT_ALT),
            ModifierFlag::OptionR => Some(KeyCode::RIGHT_ALT),
            ModifierFlag::CommandL => Some(KeyCode::LEFT_META),
            ModifierFlag::CommandR => Some(KeyCode::RIGHT_META),
            ModifierFlag::Fn => Some(KeyCode::FN),
            _ => None,
        }
    }

    /// True for synthesized flags that do not correspond to a physical key.
    pub const fn is_virtual(self) -> bool {
        matches!(
            self,
            ModifierFlag::Extra1
                | ModifierFlag::Extra2
                | ModifierFlag::Extra3
                | ModifierFlag::Extra4
                | ModifierFlag::Extra5
                | ModifierFlag::None
        )
    }
}

impl Not for ModifierFlag {
    type Output = u32;

    fn not(self) -> u32 {
        !self.bits()
    }
}

/// A raw modifier bitmask composed of zero or more `ModifierFlag`
/// patterns, possibly with un-named hardware bits.
///
/// This is a bit pattern, not a set of tags: named flags may straddle
/// shared bits. Construct per event, mutate only through [`Flags::add`]
/// and [`Flags::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// Flags with no bits set.
    pub const EMPTY: Flags = Flags(0);

    /// Wrap a raw hardware bitmask.
    pub const fn new(raw: u32) -> Self {
        Flags(raw)
    }

    /// The raw bitmask value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True if no bits at all are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Bitwise union with the given flags.
    #[must_use]
    pub fn add(self, flags: impl Into<Flags>) -> Flags {
        Flags(self.0 | flags.into().0)
    }

    /// Remove exactly the named flags requested, preserving bits
    /// contributed by other named flags that overlap them.
    ///
    /// (ShiftL | ShiftR).remove(ShiftL) must equal ShiftR exactly. A
    /// naive `value &= !mask` would also clear the generic shift bit that
    /// ShiftR contributed, so after clearing we walk the flag table and
    /// re-assert every flag that was present before and is not part of
    /// the removal request.
    #[must_use]
    pub fn remove(self, flags: impl Into<Flags>) -> Flags {
        let flags = flags.into();
        let old = self;
        let mut value = self.0 & !flags.0;

        for index in 0.. {
            let f = modifier_flag_by_index(index);

            if !flags.is_on(f) && old.is_on(f) {
                value |= f.bits();
            }

            if f == ModifierFlag::None {
                break;
            }
        }

        Flags(value)
    }

    /// Remove the FN flag.
    #[must_use]
    pub fn strip_fn(self) -> Flags {
        self.remove(ModifierFlag::Fn)
    }

    /// Remove the CURSOR flag.
    #[must_use]
    pub fn strip_cursor(self) -> Flags {
        self.remove(ModifierFlag::Cursor)
    }

    /// Remove the KEYPAD flag (same bit as CURSOR).
    #[must_use]
    pub fn strip_keypad(self) -> Flags {
        self.remove(ModifierFlag::KEYPAD)
    }

    /// Remove the NONE sentinel flag.
    #[must_use]
    pub fn strip_none(self) -> Flags {
        self.remove(ModifierFlag::None)
    }

    /// Remove all of EXTRA1..EXTRA5 in one call.
    #[must_use]
    pub fn strip_extra(self) -> Flags {
        self.remove(
            ModifierFlag::Extra1
                | ModifierFlag::Extra2
                | ModifierFlag::Extra3
                | ModifierFlag::Extra4
                | ModifierFlag::Extra5,
        )
    }

    /// Exact containment test for a single named flag: every bit of the
    /// flag's pattern must be set.
    pub const fn is_on(self, flag: ModifierFlag) -> bool {
        (self.0 & flag.bits()) == flag.bits()
    }

    /// Containment test for a composite flag value.
    ///
    /// When the argument carries the NONE bit, containment is tested
    /// against `self | NONE`: NONE acts as always-satisfiable padding in
    /// a requirement, never as a real bit the value must hold.
    pub const fn is_on_all(self, flags: Flags) -> bool {
        if flags.is_on(ModifierFlag::None) {
            ((self.0 | ModifierFlag::None.bits()) & flags.0) == flags.0
        } else {
            (self.0 & flags.0) == flags.0
        }
    }

    /// True iff the value contains NONE or any of EXTRA1..EXTRA5.
    ///
    /// Callers use this to tell synthesized modifiers apart from real
    /// hardware ones.
    pub fn has_virtual_modifiers(self) -> bool {
        for index in 0.. {
            let f = modifier_flag_by_index(index);

            if f.is_virtual() && self.is_on(f) {
                return true;
            }

            if f == ModifierFlag::None {
                break;
            }
        }
        false
    }

    /// Decompose into the named flags present, in table order.
    ///
    /// The NONE sentinel is never listed. Un-named hardware bits are not
    /// representable here and are simply not reported.
    pub fn modifier_flags(self) -> SmallVec<[ModifierFlag; 4]> {
        MODIFIER_FLAG_TABLE
            .iter()
            .copied()
            .filter(|&f| f != ModifierFlag::None && self.is_on(f))
            .collect()
    }
}

impl From<ModifierFlag> for Flags {
    fn from(flag: ModifierFlag) -> Self {
        Flags(flag.bits())
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }
}

impl BitOr<ModifierFlag> for Flags {
    type Output = Flags;

    fn bitor(self, other: ModifierFlag) -> Flags {
        Flags(self.0 | other.bits())
    }
}

impl BitOr for ModifierFlag {
    type Output = Flags;

    fn bitor(self, other: ModifierFlag) -> Flags {
        Flags(self.bits() | other.bits())
    }
}

impl BitOr<Flags> for ModifierFlag {
    type Output = Flags;

    fn bitor(self, other: Flags) -> Flags {
        Flags(self.bits() | other.0)
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, other: Flags) -> Flags {
        Flags(self.0 & other.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let named = self.modifier_flags();
        if named.is_empty() {
            return write!(f, "0x{:x}", self.0);
        }
        let mut first = true;
        for flag in named {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{}", flag)?;
            first = false;
        }
        Ok(())
    }
}
