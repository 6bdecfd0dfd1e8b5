// Keycanon Keyboard Quirk Registry
// Per-keyboard-model key code swap tables with startup registration

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::LazyLock;

use crate::{KeyCode, KeyboardType};

/// Global quirk registry
static QUIRK_REGISTRY: LazyLock<RwLock<QuirkRegistry>> = LazyLock::new(|| {
    // Initialize built-in quirk tables on first access
    RwLock::new(QuirkRegistry::with_defaults())
});

/// One hardware-to-canonical key code swap for a keyboard model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySwap {
    /// Code the hardware emits
    pub hardware: KeyCode,
    /// Canonical code the rest of the system sees
    pub canonical: KeyCode,
}

impl KeySwap {
    pub fn new(hardware: KeyCode, canonical: KeyCode) -> Self {
        Self {
            hardware,
            canonical,
        }
    }
}

/// Errors that can occur when registering quirk tables
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuirkError {
    #[error("hardware key {0} already has a quirk for this keyboard type")]
    DuplicateHardwareKey(KeyCode),

    #[error("canonical key {0} already produced by another quirk for this keyboard type")]
    DuplicateCanonicalKey(KeyCode),

    #[error("quirk for key {0} maps the key to itself")]
    IdentitySwap(KeyCode),
}

/// Internal registry of per-model swap tables.
///
/// Both directions are kept so reverse normalization is a lookup, not a
/// scan. The maps preserve registration order for deterministic error
/// reporting.
struct QuirkRegistry {
    forward: IndexMap<KeyboardType, IndexMap<u16, u16>>,
    reverse: IndexMap<KeyboardType, IndexMap<u16, u16>>,
}

impl QuirkRegistry {
    fn empty() -> Self {
        Self {
            forward: IndexMap::new(),
            reverse: IndexMap::new(),
        }
    }

    fn with_defaults() -> Self {
        let mut registry = Self::empty();

        // Chromebook keyboards have no physical function row; the
        // top-row action keys stand in for F1..F10. The raw F-row codes
        // never occur on such keyboards, so the swap is reversible.
        registry
            .add(
                KeyboardType::Chromebook,
                &[
                    KeySwap::new(KeyCode::BACK, KeyCode::F1),
                    KeySwap::new(KeyCode::FORWARD, KeyCode::F2),
                    KeySwap::new(KeyCode::REFRESH, KeyCode::F3),
                    KeySwap::new(KeyCode::SCALE, KeyCode::F5),
                    KeySwap::new(KeyCode::BRIGHTNESSDOWN, KeyCode::F6),
                    KeySwap::new(KeyCode::BRIGHTNESSUP, KeyCode::F7),
                    KeySwap::new(KeyCode::MUTE, KeyCode::F8),
                    KeySwap::new(KeyCode::VOLUMEDOWN, KeyCode::F9),
                    KeySwap::new(KeyCode::VOLUMEUP, KeyCode::F10),
                ],
            )
            .expect("built-in quirk tables are disjoint");

        registry
    }

    fn add(&mut self, keyboard_type: KeyboardType, swaps: &[KeySwap]) -> Result<(), QuirkError> {
        let forward = self.forward.entry(keyboard_type).or_default();
        let reverse = self.reverse.entry(keyboard_type).or_default();

        // Validate the whole batch before touching the tables, so a
        // rejected registration leaves the registry unchanged.
        let mut seen_hardware = forward.clone();
        let mut seen_canonical = reverse.clone();
        for swap in swaps {
            if swap.hardware == swap.canonical {
                return Err(QuirkError::IdentitySwap(swap.hardware));
            }
            if seen_hardware
                .insert(swap.hardware.code(), swap.canonical.code())
                .is_some()
            {
                return Err(QuirkError::DuplicateHardwareKey(swap.hardware));
            }
            if seen_canonical
                .insert(swap.canonical.code(), swap.hardware.code())
                .is_some()
            {
                return Err(QuirkError::DuplicateCanonicalKey(swap.canonical));
            }
        }

        *forward = seen_hardware;
        *reverse = seen_canonical;
        Ok(())
    }

    fn canonical_for(&self, keyboard_type: KeyboardType, key: KeyCode) -> Option<KeyCode> {
        self.forward
            .get(&keyboard_type)?
            .get(&key.code())
            .map(|&code| KeyCode::from(code))
    }

    fn hardware_for(&self, keyboard_type: KeyboardType, key: KeyCode) -> Option<KeyCode> {
        self.reverse
            .get(&keyboard_type)?
            .get(&key.code())
            .map(|&code| KeyCode::from(code))
    }
}

/// Register additional key swaps for a keyboard model at startup.
///
/// The combined table for the model must stay injective in both
/// directions; a rejected batch leaves the registry untouched.
pub fn register_quirks(keyboard_type: KeyboardType, swaps: &[KeySwap]) -> Result<(), QuirkError> {
    log::debug!(
        "registering {} quirk swap(s) for {}",
        swaps.len(),
        keyboard_type
    );
    QUIRK_REGISTRY.write().add(keyboard_type, swaps)
}

/// Canonical code for a hardware code on the given keyboard model, if a
/// quirk applies.
pub fn canonical_for(keyboard_type: KeyboardType, key: KeyCode) -> Option<KeyCode> {
    QUIRK_REGISTRY.read().canonical_for(keyboard_type, key)
}

/// Hardware code for a canonical code on the given keyboard model, if a
/// quirk applies.
pub fn hardware_for(keyboard_type: KeyboardType, key: KeyCode) -> Option<KeyCode> {
    QUIRK_REGISTRY.read().hardware_for(keyboard_type, key)
}
