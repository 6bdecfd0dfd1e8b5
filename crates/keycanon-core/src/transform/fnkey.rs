// Keycanon FN Key Hack
// Bidirectional rewrite between dedicated key codes and FN-chord equivalents

use crate::modifier::Flags;
use crate::{EventType, KeyCode};

/// Per-key-pair automaton for ambiguous FN-chorded keys.
///
/// Some keyboards emit a dedicated code (PageUp, Home, ...) when FN and
/// an arrow key are pressed together, instead of the two signals the
/// chord is made of. Input-side `normalize` rewrites the dedicated code
/// to its chord equivalent so the remapping policy never sees the
/// hardware form; output-side `reverse` undoes the rewrite before
/// synthesis.
///
/// The two directions keep independent activation state because the
/// input and output pipelines run on independent event streams that may
/// interleave arbitrarily. An activation flag stays set from the down
/// event that claimed the key until the matching up event, so key
/// repeats keep rewriting to the same code.
#[derive(Debug)]
pub struct FnKeyHack {
    from_key: KeyCode,
    to_key: KeyCode,
    active_normalize: bool,
    active_reverse: bool,
}

impl FnKeyHack {
    pub fn new(from_key: KeyCode, to_key: KeyCode) -> Self {
        Self {
            from_key,
            to_key,
            active_normalize: false,
            active_reverse: false,
        }
    }

    /// The dedicated hardware code this pair claims.
    pub fn from_key(&self) -> KeyCode {
        self.from_key
    }

    /// The chord-equivalent canonical code this pair produces.
    pub fn to_key(&self) -> KeyCode {
        self.to_key
    }

    /// Input direction: dedicated code to chord equivalent
    /// (e.g. PageUp to FN+Up-Arrow's code).
    ///
    /// Returns true if the event was claimed and rewritten, so the
    /// caller can stop trying other pairs.
    pub fn normalize(&mut self, key: &mut KeyCode, flags: Flags, event_type: EventType) -> bool {
        Self::remap(
            key,
            flags,
            event_type,
            &mut self.active_normalize,
            self.from_key,
            self.to_key,
        )
    }

    /// Output direction: chord equivalent back to dedicated code
    /// (e.g. FN+Up-Arrow's code to PageUp).
    pub fn reverse(&mut self, key: &mut KeyCode, flags: Flags, event_type: EventType) -> bool {
        Self::remap(
            key,
            flags,
            event_type,
            &mut self.active_reverse,
            self.to_key,
            self.from_key,
        )
    }

    /// Shared transition function for both directions.
    ///
    /// A down event matching `from_key` claims the key and activates the
    /// rewrite; repeats arrive as further downs and keep matching. The
    /// matching up event is rewritten one last time and deactivates. An
    /// up event without a prior claim passes through untouched.
    fn remap(
        key: &mut KeyCode,
        flags: Flags,
        event_type: EventType,
        active: &mut bool,
        from_key: KeyCode,
        to_key: KeyCode,
    ) -> bool {
        if *key != from_key {
            return false;
        }

        match event_type {
            EventType::Down => {
                *active = true;
            }
            EventType::Up => {
                if !*active {
                    return false;
                }
                *active = false;
            }
            EventType::Modify => {
                if !*active {
                    return false;
                }
            }
        }

        log::trace!("fn hack {}: {} -> {} [{}]", event_type, from_key, to_key, flags);
        *key = to_key;
        true
    }
}
