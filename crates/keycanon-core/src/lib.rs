// Keycanon Core Library
// Canonical event representations for keyboard/mouse remapping

pub mod button;
pub mod config;
pub mod input;
pub mod key;
pub mod modifier;
pub mod transform;

pub use button::{Buttons, PointingButton, POINTING_BUTTON_TABLE};
pub use config::{
    apply_quirk_entries, default_fn_pairs, ConfigError, FnKeyPair, FnPairEntry, PipelineConfig,
    QuirkEntry,
};
pub use input::{keyboard_type_matches, EventType, KeyEvent, KeyboardType, PointingEvent};
pub use key::{key_from_name, key_name, KeyCode};
pub use modifier::{modifier_flag_by_index, Flags, ModifierFlag, MODIFIER_FLAG_TABLE};
pub use transform::{
    normalize_key, register_quirks, reverse_normalize_key, FnKeyHack, KeySwap, Pipeline,
    QuirkError,
};
