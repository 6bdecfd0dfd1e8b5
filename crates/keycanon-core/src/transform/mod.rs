// Keycanon Transform Module
// Canonical form conversion for hardware key events

pub mod fnkey;
pub mod normalize;
pub mod pipeline;
pub mod quirks;

pub use fnkey::FnKeyHack;
pub use normalize::{normalize_key, reverse_normalize_key};
pub use pipeline::Pipeline;
pub use quirks::{register_quirks, KeySwap, QuirkError};
