// Keycanon Key Normalization
// Keyboard-model-specific quirk removal and restoration

use crate::modifier::{Flags, ModifierFlag};
use crate::transform::quirks;
use crate::{EventType, KeyCode, KeyboardType};

/// Rewrite a raw (key, flags) pair into canonical form for the given
/// keyboard model.
///
/// Two classes of quirk are undone here:
/// - code swaps from the quirk registry (e.g. Chromebook top-row action
///   keys standing in for the function row);
/// - the Apple navigation-cluster flag quirk: Mac hardware reports
///   arrows, Home/End and PageUp/PageDown with the shared CURSOR/KEYPAD
///   bit set, which canonical events never carry.
///
/// Inverse of [`reverse_normalize_key`] for every keyboard type over the
/// valid hardware input domain. The FN-chord ambiguity is not resolved
/// here; that is the FN-key hack's job.
pub fn normalize_key(
    key: &mut KeyCode,
    flags: &mut Flags,
    event_type: EventType,
    keyboard_type: KeyboardType,
) {
    if let Some(canonical) = quirks::canonical_for(keyboard_type, *key) {
        log::trace!(
            "normalize {}: {} -> {} ({})",
            event_type,
            key,
            canonical,
            keyboard_type
        );
        *key = canonical;
    }

    if keyboard_type == KeyboardType::Mac && key.is_navigation_key() {
        *flags = flags.strip_cursor();
    }
}

/// Rewrite a canonical (key, flags) pair back into the hardware form the
/// given keyboard model expects for synthesis.
///
/// Applies the inverse steps of [`normalize_key`] in reverse order: the
/// navigation-cluster flag is restored first, then the code swap is
/// undone through the registry's reverse table.
pub fn reverse_normalize_key(
    key: &mut KeyCode,
    flags: &mut Flags,
    event_type: EventType,
    keyboard_type: KeyboardType,
) {
    if keyboard_type == KeyboardType::Mac && key.is_navigation_key() {
        *flags = flags.add(ModifierFlag::KEYPAD);
    }

    if let Some(hardware) = quirks::hardware_for(keyboard_type, *key) {
        log::trace!(
            "reverse normalize {}: {} -> {} ({})",
            event_type,
            key,
            hardware,
            keyboard_type
        );
        *key = hardware;
    }
}
