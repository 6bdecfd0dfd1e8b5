// Keycanon End-to-End Pipeline Scenarios
//
// These tests drive full event streams through the normalization
// pipeline the way a remapping session would: raw hardware events in,
// canonical events to the policy engine, canonical output events back
// to hardware form.
//
// Run with: cargo test --test pipeline_roundtrip

use keycanon_core::{
    EventType, Flags, FnKeyPair, KeyCode, KeyEvent, KeyboardType, ModifierFlag, Pipeline,
    PipelineConfig,
};

// =========================================================================
// Test Helpers
// =========================================================================

/// Run a raw event stream through the input side of the pipeline.
fn normalize_stream(pipeline: &Pipeline, stream: &[KeyEvent]) -> Vec<KeyEvent> {
    stream
        .iter()
        .map(|event| {
            let mut event = *event;
            pipeline.normalize_input(&mut event);
            event
        })
        .collect()
}

/// Run a canonical event stream through the output side of the pipeline.
fn prepare_stream(pipeline: &Pipeline, stream: &[KeyEvent]) -> Vec<KeyEvent> {
    stream
        .iter()
        .map(|event| {
            let mut event = *event;
            pipeline.prepare_output(&mut event);
            event
        })
        .collect()
}

/// A down/repeat/up sequence for one key.
fn tap_with_repeat(key: KeyCode, flags: Flags, keyboard_type: KeyboardType) -> Vec<KeyEvent> {
    vec![
        KeyEvent::new(key, flags, EventType::Down, keyboard_type),
        KeyEvent::new(key, flags, EventType::Down, keyboard_type),
        KeyEvent::new(key, flags, EventType::Up, keyboard_type),
    ]
}

fn keys(stream: &[KeyEvent]) -> Vec<KeyCode> {
    stream.iter().map(|event| event.key).collect()
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn fn_hack_round_trip_page_up() {
    // one configured ambiguous pair: PageUp <-> FN+Up-Arrow's code
    let config = PipelineConfig {
        fn_pairs: vec![FnKeyPair::new(KeyCode::PAGE_UP, KeyCode::UP)],
    };
    let pipeline = Pipeline::new(&config).unwrap();

    let fn_flags = Flags::from(ModifierFlag::Fn);
    let raw = tap_with_repeat(KeyCode::PAGE_UP, fn_flags, KeyboardType::Windows);

    let canonical = normalize_stream(&pipeline, &raw);
    assert_eq!(
        keys(&canonical),
        vec![KeyCode::UP, KeyCode::UP, KeyCode::UP]
    );
    for event in &canonical {
        assert!(event.flags.is_on(ModifierFlag::Fn));
    }

    // feeding the canonical stream back through the output side must
    // reproduce the original hardware sequence exactly
    let restored = prepare_stream(&pipeline, &canonical);
    assert_eq!(restored, raw);
}

#[test]
fn fn_hack_directions_do_not_interfere() {
    let config = PipelineConfig {
        fn_pairs: vec![FnKeyPair::new(KeyCode::PAGE_UP, KeyCode::UP)],
    };
    let pipeline = Pipeline::new(&config).unwrap();

    // drive the input side to Active
    let mut down = KeyEvent::new(
        KeyCode::PAGE_UP,
        Flags::EMPTY,
        EventType::Down,
        KeyboardType::Windows,
    );
    pipeline.normalize_input(&mut down);
    assert_eq!(down.key, KeyCode::UP);

    // the output side has seen no down, so a canonical up passes through
    let mut up = KeyEvent::new(
        KeyCode::UP,
        Flags::EMPTY,
        EventType::Up,
        KeyboardType::Windows,
    );
    pipeline.prepare_output(&mut up);
    assert_eq!(up.key, KeyCode::UP);

    // and the input side is still Active: the matching up is rewritten
    let mut raw_up = KeyEvent::new(
        KeyCode::PAGE_UP,
        Flags::EMPTY,
        EventType::Up,
        KeyboardType::Windows,
    );
    pipeline.normalize_input(&mut raw_up);
    assert_eq!(raw_up.key, KeyCode::UP);
}

#[test]
fn chromebook_top_row_through_pipeline() {
    let pipeline = Pipeline::with_defaults();

    let raw = tap_with_repeat(KeyCode::BACK, Flags::EMPTY, KeyboardType::Chromebook);
    let canonical = normalize_stream(&pipeline, &raw);
    assert_eq!(
        keys(&canonical),
        vec![KeyCode::F1, KeyCode::F1, KeyCode::F1]
    );

    let restored = prepare_stream(&pipeline, &canonical);
    assert_eq!(restored, raw);
}

#[test]
fn mac_navigation_cluster_round_trip() {
    // Mac hardware reports the nav cluster with the shared CURSOR/KEYPAD
    // bit; the canonical stream must not carry it, and the output side
    // must restore it
    let config = PipelineConfig {
        fn_pairs: vec![FnKeyPair::new(KeyCode::PAGE_UP, KeyCode::UP)],
    };
    let pipeline = Pipeline::new(&config).unwrap();

    let raw_flags = ModifierFlag::KEYPAD | ModifierFlag::Fn;
    let raw = tap_with_repeat(KeyCode::PAGE_UP, raw_flags, KeyboardType::Mac);

    let canonical = normalize_stream(&pipeline, &raw);
    assert_eq!(
        keys(&canonical),
        vec![KeyCode::UP, KeyCode::UP, KeyCode::UP]
    );
    for event in &canonical {
        assert!(!event.flags.is_on(ModifierFlag::Cursor));
        assert!(event.flags.is_on(ModifierFlag::Fn));
    }

    let restored = prepare_stream(&pipeline, &canonical);
    assert_eq!(restored, raw);
}

#[test]
fn interleaved_input_and_output_streams() {
    // input and output events for different pairs interleave without
    // corrupting each other's activation state
    let pipeline = Pipeline::with_defaults();
    let keyboard_type = KeyboardType::Windows;

    let mut in_down = KeyEvent::new(KeyCode::HOME, Flags::EMPTY, EventType::Down, keyboard_type);
    pipeline.normalize_input(&mut in_down);
    assert_eq!(in_down.key, KeyCode::LEFT);

    let mut out_down = KeyEvent::new(KeyCode::DOWN, Flags::EMPTY, EventType::Down, keyboard_type);
    pipeline.prepare_output(&mut out_down);
    assert_eq!(out_down.key, KeyCode::PAGE_DOWN);

    let mut in_up = KeyEvent::new(KeyCode::HOME, Flags::EMPTY, EventType::Up, keyboard_type);
    pipeline.normalize_input(&mut in_up);
    assert_eq!(in_up.key, KeyCode::LEFT);

    let mut out_up = KeyEvent::new(KeyCode::DOWN, Flags::EMPTY, EventType::Up, keyboard_type);
    pipeline.prepare_output(&mut out_up);
    assert_eq!(out_up.key, KeyCode::PAGE_DOWN);
}

#[test]
fn normalization_is_bijective_for_representative_events() {
    use keycanon_core::{normalize_key, reverse_normalize_key};

    let keyboard_types = [
        KeyboardType::Ibm,
        KeyboardType::Chromebook,
        KeyboardType::Windows,
        KeyboardType::Mac,
    ];
    let raw_events: &[(KeyCode, Flags)] = &[
        (KeyCode::ENTER, Flags::EMPTY),
        (KeyCode::SPACE, Flags::from(ModifierFlag::ShiftL)),
        (KeyCode::BACK, Flags::from(ModifierFlag::ControlR)),
        (KeyCode::VOLUMEUP, Flags::EMPTY),
        (KeyCode::F12, Flags::from(ModifierFlag::CommandL)),
        (KeyCode::KP0, Flags::from(ModifierFlag::KEYPAD)),
        (
            KeyCode::UP,
            ModifierFlag::KEYPAD | ModifierFlag::ShiftR,
        ),
    ];

    for &keyboard_type in &keyboard_types {
        for &(raw_key, raw_flags) in raw_events {
            // the Mac nav cluster always carries the keypad bit in raw
            // form; other combinations are outside the hardware domain
            if keyboard_type == KeyboardType::Mac
                && raw_key.is_navigation_key()
                && !raw_flags.is_on(ModifierFlag::KEYPAD)
            {
                continue;
            }

            for event_type in [EventType::Down, EventType::Up] {
                let (mut key, mut flags) = (raw_key, raw_flags);
                normalize_key(&mut key, &mut flags, event_type, keyboard_type);
                reverse_normalize_key(&mut key, &mut flags, event_type, keyboard_type);
                assert_eq!(
                    (key, flags),
                    (raw_key, raw_flags),
                    "round trip failed for {} on {}",
                    raw_key,
                    keyboard_type
                );
            }
        }
    }
}
