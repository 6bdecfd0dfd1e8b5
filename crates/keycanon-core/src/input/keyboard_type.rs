// Keycanon Input Layer - Keyboard Model Tag
// Keyboard variants whose hardware quirks normalization must undo

/// Keyboard model variants with distinct normalization quirks.
///
/// Detection from device metadata is the host's job; this core only
/// consumes the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardType {
    /// IBM-style keyboards (ThinkPad, etc.)
    /// Full navigation cluster, no quirks.
    Ibm,
    /// Chromebook keyboards
    /// No physical function row; the top-row action keys stand in for it.
    Chromebook,
    /// Standard Windows keyboards
    Windows,
    /// Apple keyboards
    /// Navigation cluster reports the keypad bit instead of the cursor bit.
    Mac,
    /// Unknown/unsupported keyboard type
    Unknown,
}

impl KeyboardType {
    /// Convert string to KeyboardType
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ibm" => Some(KeyboardType::Ibm),
            "chromebook" | "chrome" => Some(KeyboardType::Chromebook),
            "windows" | "win" | "pc" => Some(KeyboardType::Windows),
            "mac" | "apple" | "macintosh" => Some(KeyboardType::Mac),
            "unknown" => Some(KeyboardType::Unknown),
            _ => None,
        }
    }

    /// Convert KeyboardType to string
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardType::Ibm => "IBM",
            KeyboardType::Chromebook => "Chromebook",
            KeyboardType::Windows => "Windows",
            KeyboardType::Mac => "Mac",
            KeyboardType::Unknown => "Unknown",
        }
    }

    /// Check if this keyboard type matches a condition string
    /// Supports single types or comma-separated lists
    pub fn matches(&self, condition: &str) -> bool {
        condition
            .split(',')
            .map(|s| s.trim())
            .filter_map(KeyboardType::from_str)
            .any(|t| t == *self)
    }
}

impl std::fmt::Display for KeyboardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check if a keyboard type condition matches
pub fn keyboard_type_matches(kb_type: KeyboardType, condition: &str) -> bool {
    kb_type.matches(condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_type_from_str() {
        assert_eq!(KeyboardType::from_str("IBM"), Some(KeyboardType::Ibm));
        assert_eq!(KeyboardType::from_str("ibm"), Some(KeyboardType::Ibm));
        assert_eq!(
            KeyboardType::from_str("chrome"),
            Some(KeyboardType::Chromebook)
        );
        assert_eq!(KeyboardType::from_str("pc"), Some(KeyboardType::Windows));
        assert_eq!(KeyboardType::from_str("apple"), Some(KeyboardType::Mac));
        assert_eq!(KeyboardType::from_str("invalid"), None);
    }

    #[test]
    fn test_keyboard_type_as_str() {
        assert_eq!(KeyboardType::Ibm.as_str(), "IBM");
        assert_eq!(KeyboardType::Chromebook.as_str(), "Chromebook");
        assert_eq!(KeyboardType::Mac.as_str(), "Mac");
    }

    #[test]
    fn test_keyboard_type_matches_single() {
        assert!(KeyboardType::Ibm.matches("IBM"));
        assert!(!KeyboardType::Ibm.matches("Mac"));
    }

    #[test]
    fn test_keyboard_type_matches_list() {
        assert!(KeyboardType::Ibm.matches("IBM, Chromebook, Windows"));
        assert!(KeyboardType::Chromebook.matches("IBM, Chromebook, Windows"));
        assert!(!KeyboardType::Mac.matches("IBM, Chromebook, Windows"));
    }

    #[test]
    fn test_keyboard_type_matches_helper() {
        assert!(keyboard_type_matches(KeyboardType::Mac, "mac, ibm"));
        assert!(!keyboard_type_matches(KeyboardType::Windows, "mac, ibm"));
    }
}
