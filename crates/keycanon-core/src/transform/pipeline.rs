// Keycanon Event Pipeline
// Normalization chain between the event tap and the policy engine

use parking_lot::Mutex;

use crate::config::{ConfigError, PipelineConfig};
use crate::transform::fnkey::FnKeyHack;
use crate::transform::normalize::{normalize_key, reverse_normalize_key};
use crate::KeyEvent;

/// The per-session normalization pipeline.
///
/// Input direction: raw hardware event -> key normalization -> FN hack
/// normalize -> canonical event for the policy engine. Output direction:
/// canonical event from the policy engine -> FN hack reverse -> key
/// reverse-normalization -> hardware event for synthesis.
///
/// The FN hack instances are shared between the two directions (each
/// instance carries independent per-direction activation state), so they
/// sit behind a mutex; the host still has to deliver each stream in
/// order, since the activation state machines depend on event ordering.
pub struct Pipeline {
    fn_hacks: Mutex<Vec<FnKeyHack>>,
}

impl Pipeline {
    /// Build a pipeline from a validated configuration.
    pub fn new(config: &PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let fn_hacks = config
            .fn_pairs
            .iter()
            .map(|pair| FnKeyHack::new(pair.from, pair.to))
            .collect();
        Ok(Self {
            fn_hacks: Mutex::new(fn_hacks),
        })
    }

    /// Pipeline with the built-in FN pair table.
    pub fn with_defaults() -> Self {
        Self::new(&PipelineConfig::with_defaults())
            .expect("built-in fn key pairs are disjoint")
    }

    /// Rewrite a raw hardware event into canonical form.
    pub fn normalize_input(&self, event: &mut KeyEvent) {
        normalize_key(
            &mut event.key,
            &mut event.flags,
            event.event_type,
            event.keyboard_type,
        );

        let mut fn_hacks = self.fn_hacks.lock();
        for hack in fn_hacks.iter_mut() {
            // at most one pair claims an event; stop at the first
            if hack.normalize(&mut event.key, event.flags, event.event_type) {
                break;
            }
        }
    }

    /// Rewrite a canonical output event into hardware form.
    pub fn prepare_output(&self, event: &mut KeyEvent) {
        {
            let mut fn_hacks = self.fn_hacks.lock();
            for hack in fn_hacks.iter_mut() {
                if hack.reverse(&mut event.key, event.flags, event.event_type) {
                    break;
                }
            }
        }

        reverse_normalize_key(
            &mut event.key,
            &mut event.flags,
            event.event_type,
            event.keyboard_type,
        );
    }
}
