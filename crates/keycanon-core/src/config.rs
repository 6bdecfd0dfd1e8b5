// Keycanon Configuration Surface
// Startup tables handed in by the host, validated before the session starts

use indexmap::IndexSet;
use serde::Deserialize;

use crate::key::key_from_name;
use crate::transform::quirks::{self, KeySwap, QuirkError};
use crate::{KeyCode, KeyboardType};

/// Configuration errors
///
/// All of these are precondition violations that must surface at load
/// time; event processing itself has no failure paths.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown key name: {0}")]
    UnknownKey(String),

    #[error("unknown keyboard type: {0}")]
    UnknownKeyboardType(String),

    #[error("fn key pair maps {0} to itself")]
    IdentityPair(KeyCode),

    #[error("key {0} is claimed by more than one fn key pair")]
    OverlappingPairs(KeyCode),

    #[error(transparent)]
    Quirk(#[from] QuirkError),
}

/// One configured ambiguous-key pair, instantiated as an `FnKeyHack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnKeyPair {
    /// Dedicated code the hardware emits for the FN chord
    pub from: KeyCode,
    /// Chord-equivalent code the policy engine should see
    pub to: KeyCode,
}

impl FnKeyPair {
    pub fn new(from: KeyCode, to: KeyCode) -> Self {
        Self { from, to }
    }
}

/// Serialized form of an fn key pair, naming keys by string
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FnPairEntry {
    pub from: String,
    pub to: String,
}

/// Serialized form of a keyboard quirk swap
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuirkEntry {
    pub keyboard: String,
    pub hardware: String,
    pub canonical: String,
}

/// The static tables this core consumes at startup.
///
/// The host owns loading and deserialization of whatever format it
/// stores these in; this struct is the validated hand-off point.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub fn_pairs: Vec<FnKeyPair>,
}

/// The FN chord rewrites Apple laptop hardware needs.
pub fn default_fn_pairs() -> Vec<FnKeyPair> {
    vec![
        FnKeyPair::new(KeyCode::PAGE_UP, KeyCode::UP),
        FnKeyPair::new(KeyCode::PAGE_DOWN, KeyCode::DOWN),
        FnKeyPair::new(KeyCode::HOME, KeyCode::LEFT),
        FnKeyPair::new(KeyCode::END, KeyCode::RIGHT),
        FnKeyPair::new(KeyCode::DELETE, KeyCode::BACKSPACE),
    ]
}

impl PipelineConfig {
    /// Config with the built-in FN pair table.
    pub fn with_defaults() -> Self {
        Self {
            fn_pairs: default_fn_pairs(),
        }
    }

    /// Build a config from deserialized entries, resolving key names.
    pub fn from_entries(entries: &[FnPairEntry]) -> Result<Self, ConfigError> {
        let mut fn_pairs = Vec::with_capacity(entries.len());
        for entry in entries {
            fn_pairs.push(FnKeyPair::new(
                resolve_key(&entry.from)?,
                resolve_key(&entry.to)?,
            ));
        }
        let config = Self { fn_pairs };
        config.validate()?;
        Ok(config)
    }

    /// Check the preconditions the event pipeline relies on.
    ///
    /// Every key code may appear in at most one pair, on either side:
    /// the pipeline lets the first claiming pair win, so overlap would
    /// make rewriting order-dependent. A key pair must also actually
    /// rewrite, so from == to is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut claimed: IndexSet<u16> = IndexSet::new();
        for pair in &self.fn_pairs {
            if pair.from == pair.to {
                return Err(ConfigError::IdentityPair(pair.from));
            }
            if !claimed.insert(pair.from.code()) {
                return Err(ConfigError::OverlappingPairs(pair.from));
            }
            if !claimed.insert(pair.to.code()) {
                return Err(ConfigError::OverlappingPairs(pair.to));
            }
        }
        log::debug!("validated {} fn key pair(s)", self.fn_pairs.len());
        Ok(())
    }
}

/// Resolve deserialized quirk entries and register them with the global
/// quirk registry.
pub fn apply_quirk_entries(entries: &[QuirkEntry]) -> Result<(), ConfigError> {
    for entry in entries {
        let keyboard_type = KeyboardType::from_str(&entry.keyboard)
            .ok_or_else(|| ConfigError::UnknownKeyboardType(entry.keyboard.clone()))?;
        let swap = KeySwap::new(resolve_key(&entry.hardware)?, resolve_key(&entry.canonical)?);
        quirks::register_quirks(keyboard_type, &[swap])?;
    }
    Ok(())
}

fn resolve_key(name: &str) -> Result<KeyCode, ConfigError> {
    key_from_name(name).ok_or_else(|| ConfigError::UnknownKey(name.to_string()))
}
