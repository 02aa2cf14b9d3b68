#![no_main]

use libfuzzer_sys::fuzz_target;
use statefold_layout::{normalize, normalize_str, synthesize};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 1 << 16 {
        return;
    }

    // normalize_str must never panic; invalid JSON is an Err, not a crash.
    let Ok(state) = normalize_str(text) else {
        return;
    };

    // Synthesis over whatever the fold produced must never panic either,
    // and its output must stay renormalizable.
    let tree = synthesize(&state);
    if let Ok(doc) = tree.to_value() {
        let again = normalize(&doc);
        assert_eq!(
            again.sessions.len(),
            state.sessions.len(),
            "renormalization must keep the session count"
        );
    }
});
