// Keycanon Key Type
// Key code constants, names, and modifier classification

use std::fmt;
use std::str::FromStr;

use crate::modifier::ModifierFlag;

include!(concat!(env!("OUT_DIR"), "/key_codes.rs"));

impl KeyCode {
    pub const ESC: KeyCode = KeyCode(1);
    pub const BACKSPACE: KeyCode = KeyCode(14);
    pub const TAB: KeyCode = KeyCode(15);
    pub const ENTER: KeyCode = KeyCode(28);
    pub const LEFT_CTRL: KeyCode = KeyCode(29);
    pub const LEFT_SHIFT: KeyCode = KeyCode(42);
    pub const RIGHT_SHIFT: KeyCode = KeyCode(54);
    pub const LEFT_ALT: KeyCode = KeyCode(56);
    pub const SPACE: KeyCode = KeyCode(57);
    pub const CAPSLOCK: KeyCode = KeyCode(58);
    pub const F1: KeyCode = KeyCode(59);
    pub const F2: KeyCode = KeyCode(60);
    pub const F3: KeyCode = KeyCode(61);
    pub const F4: KeyCode = KeyCode(62);
    pub const F5: KeyCode = KeyCode(63);
    pub const F6: KeyCode = KeyCode(64);
    pub const F7: KeyCode = KeyCode(65);
    pub const F8: KeyCode = KeyCode(66);
    pub const F9: KeyCode = KeyCode(67);
    pub const F10: KeyCode = KeyCode(68);
    pub const KP0: KeyCode = KeyCode(82);
    pub const KPDOT: KeyCode = KeyCode(83);
    pub const F11: KeyCode = KeyCode(87);
    pub const F12: KeyCode = KeyCode(88);
    pub const KPENTER: KeyCode = KeyCode(96);
    pub const RIGHT_CTRL: KeyCode = KeyCode(97);
    pub const RIGHT_ALT: KeyCode = KeyCode(100);
    pub const HOME: KeyCode = KeyCode(102);
    pub const UP: KeyCode = KeyCode(103);
    pub const PAGE_UP: KeyCode = KeyCode(104);
    pub const LEFT: KeyCode = KeyCode(105);
    pub const RIGHT: KeyCode = KeyCode(106);
    pub const END: KeyCode = KeyCode(107);
    pub const DOWN: KeyCode = KeyCode(108);
    pub const PAGE_DOWN: KeyCode = KeyCode(109);
    pub const INSERT: KeyCode = KeyCode(110);
    pub const DELETE: KeyCode = KeyCode(111);
    pub const MUTE: KeyCode = KeyCode(113);
    pub const VOLUMEDOWN: KeyCode = KeyCode(114);
    pub const VOLUMEUP: KeyCode = KeyCode(115);
    pub const SCALE: KeyCode = KeyCode(120);
    pub const LEFT_META: KeyCode = KeyCode(125);
    pub const RIGHT_META: KeyCode = KeyCode(126);
    pub const BACK: KeyCode = KeyCode(158);
    pub const FORWARD: KeyCode = KeyCode(159);
    pub const REFRESH: KeyCode = KeyCode(173);
    pub const BRIGHTNESSDOWN: KeyCode = KeyCode(224);
    pub const BRIGHTNESSUP: KeyCode = KeyCode(225);
    pub const FN: KeyCode = KeyCode(0x1d0);

    /// The modifier flag this key produces, or `ModifierFlag::None` if
    /// the key is not a modifier.
    pub const fn modifier_flag(self) -> ModifierFlag {
        match self.0 {
            29 => ModifierFlag::ControlL,
            42 => ModifierFlag::ShiftL,
            54 => ModifierFlag::ShiftR,
            56 => ModifierFlag::OptionL,
            58 => ModifierFlag::Capslock,
            97 => ModifierFlag::ControlR,
            100 => ModifierFlag::OptionR,
            125 => ModifierFlag::CommandL,
            126 => ModifierFlag::CommandR,
            0x1d0 => ModifierFlag::Fn,
            _ => ModifierFlag::None,
        }
    }

    /// True if this key produces a modifier flag.
    pub fn is_modifier(self) -> bool {
        self.modifier_flag() != ModifierFlag::None
    }

    /// True for the navigation cluster (arrows, Home/End, PageUp/PageDown).
    ///
    /// The cluster occupies the contiguous code range HOME..=PAGE_DOWN.
    pub fn is_navigation_key(self) -> bool {
        self >= KeyCode::HOME && self <= KeyCode::PAGE_DOWN
    }
}

/// Name table for the key codes this crate works with. Codes outside the
/// table display as "UNKNOWN" but still pass through every transform
/// untouched.
const KEY_NAME_TABLE: &[(&str, u16)] = &[
    ("ESC", 1),
    ("BACKSPACE", 14),
    ("TAB", 15),
    ("ENTER", 28),
    ("LEFT_CTRL", 29),
    ("LEFT_SHIFT", 42),
    ("RIGHT_SHIFT", 54),
    ("LEFT_ALT", 56),
    ("SPACE", 57),
    ("CAPSLOCK", 58),
    ("F1", 59),
    ("F2", 60),
    ("F3", 61),
    ("F4", 62),
    ("F5", 63),
    ("F6", 64),
    ("F7", 65),
    ("F8", 66),
    ("F9", 67),
    ("F10", 68),
    ("KP0", 82),
    ("KPDOT", 83),
    ("F11", 87),
    ("F12", 88),
    ("KPENTER", 96),
    ("RIGHT_CTRL", 97),
    ("RIGHT_ALT", 100),
    ("HOME", 102),
    ("UP", 103),
    ("PAGE_UP", 104),
    ("LEFT", 105),
    ("RIGHT", 106),
    ("END", 107),
    ("DOWN", 108),
    ("PAGE_DOWN", 109),
    ("INSERT", 110),
    ("DELETE", 111),
    ("MUTE", 113),
    ("VOLUMEDOWN", 114),
    ("VOLUMEUP", 115),
    ("SCALE", 120),
    ("LEFT_META", 125),
    ("RIGHT_META", 126),
    ("BACK", 158),
    ("FORWARD", 159),
    ("REFRESH", 173),
    ("BRIGHTNESSDOWN", 224),
    ("BRIGHTNESSUP", 225),
    ("FN", 0x1d0),
];

/// Display name for a key code
pub fn key_name(code: u16) -> &'static str {
    KEY_NAME_TABLE
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
        .unwrap_or("UNKNOWN")
}

/// Try to parse a key name to a key code
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let name_upper = name.to_uppercase();
    KEY_NAME_TABLE
        .iter()
        .find(|(n, _)| *n == name_upper)
        .map(|(_, code)| KeyCode::from(*code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(key_from_name("enter"), Some(KeyCode::ENTER));
        assert_eq!(key_from_name("ENTER"), Some(KeyCode::ENTER));
        assert_eq!(key_from_name("PAGE_UP"), Some(KeyCode::PAGE_UP));
        assert_eq!(key_from_name("FN"), Some(KeyCode::FN));
        assert_eq!(key_from_name("NOT_A_KEY"), None);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(KeyCode::HOME.to_string(), "HOME");
        assert_eq!(KeyCode::FN.to_string(), "FN");
        assert_eq!(KeyCode::from(0x2ff).to_string(), "UNKNOWN");
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!("PAGE_DOWN".parse::<KeyCode>(), Ok(KeyCode::PAGE_DOWN));
        assert!("bogus".parse::<KeyCode>().is_err());
    }

    #[test]
    fn test_modifier_flag_mapping() {
        assert_eq!(KeyCode::LEFT_SHIFT.modifier_flag(), ModifierFlag::ShiftL);
        assert_eq!(KeyCode::RIGHT_SHIFT.modifier_flag(), ModifierFlag::ShiftR);
        assert_eq!(KeyCode::FN.modifier_flag(), ModifierFlag::Fn);
        assert_eq!(KeyCode::ENTER.modifier_flag(), ModifierFlag::None);
    }

    #[test]
    fn test_is_modifier() {
        assert!(KeyCode::LEFT_CTRL.is_modifier());
        assert!(KeyCode::CAPSLOCK.is_modifier());
        assert!(!KeyCode::SPACE.is_modifier());
        assert!(!KeyCode::UP.is_modifier());
    }

    #[test]
    fn test_modifier_flag_key_code_round_trip() {
        // every physical flag maps to a key that maps back to the flag
        for flag in crate::modifier::MODIFIER_FLAG_TABLE {
            if let Some(key) = flag.key_code() {
                assert_eq!(key.modifier_flag(), flag);
            }
        }
    }

    #[test]
    fn test_navigation_range() {
        assert!(KeyCode::HOME.is_navigation_key());
        assert!(KeyCode::UP.is_navigation_key());
        assert!(KeyCode::PAGE_DOWN.is_navigation_key());
        assert!(!KeyCode::INSERT.is_navigation_key());
        assert!(!KeyCode::ENTER.is_navigation_key());
    }

    #[test]
    fn test_key_ordering() {
        assert!(KeyCode::HOME < KeyCode::UP);
        assert!(KeyCode::PAGE_DOWN > KeyCode::END);
    }
}
