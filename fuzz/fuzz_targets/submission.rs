#![no_main]

use honeytrap_core::{FixedClock, FormData, HoneypotField, SequentialEntropy, TrapConfig};
use libfuzzer_sys::fuzz_target;

// Arbitrary bodies must never panic, and must never pass without the secret.
fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    let clock = FixedClock::new(1_700_000_000);
    let Ok(mut field) = HoneypotField::new(
        TrapConfig::new("fuzz-secret"),
        SequentialEntropy::new(3),
        &clock,
    ) else {
        return;
    };
    field.process(Some(&FormData::from_urlencoded(body)));
    assert!(!field.validate());
    assert_eq!(field.state().control_entries().count(), 1);
});
