//! Arm → echo → validate, across decoy counts, timeouts and hash schemes.

use honeytrap_core::{
    compute_control_hash, FixedClock, FormData, HashScheme, HoneypotField, RngEntropy,
    TrapConfig, TrapState,
};
use proptest::prelude::*;

fn echo(state: &TrapState) -> FormData {
    state
        .iter()
        .map(|e| (e.name.clone(), e.value().to_string()))
        .collect()
}

fn scheme() -> impl Strategy<Value = HashScheme> {
    prop_oneof![Just(HashScheme::Concat), Just(HashScheme::LengthPrefixed)]
}

proptest! {
    #[test]
    fn echoed_trap_validates(
        seed in any::<u64>(),
        decoys in 1u8..=5,
        timeout in 0u64..100_000,
        now in 0i64..4_000_000_000,
        scheme in scheme(),
        secret in "[ -~]{1,40}",
    ) {
        let clock = FixedClock::new(now);
        let cfg = TrapConfig::new(secret)
            .with_decoy_count(decoys)
            .with_timeout_secs(timeout)
            .with_hash_scheme(scheme);

        let mut render = HoneypotField::new(cfg.clone(), RngEntropy::seeded(seed), &clock).unwrap();
        render.process::<FormData>(None);
        prop_assert_eq!(render.state().len(), usize::from(decoys) + 1);
        prop_assert_eq!(render.state().control_entries().count(), 1);

        let form = echo(render.state());
        let mut submit = HoneypotField::new(cfg, RngEntropy::seeded(seed ^ 1), &clock).unwrap();
        submit.process(Some(&form));
        prop_assert!(submit.validate());
    }

    #[test]
    fn any_filled_decoy_is_caught(
        seed in any::<u64>(),
        decoys in 1u8..=5,
        pick in any::<prop::sample::Index>(),
        junk in "[a-z0-9]{1,16}",
    ) {
        let clock = FixedClock::new(1_700_000_000);
        let cfg = TrapConfig::new("secret").with_decoy_count(decoys);

        let mut render = HoneypotField::new(cfg.clone(), RngEntropy::seeded(seed), &clock).unwrap();
        render.arm();
        let decoy_names: Vec<String> =
            render.state().decoy_entries().map(|e| e.name.clone()).collect();
        let target = pick.get(&decoy_names).clone();

        let form: FormData = echo(render.state())
            .pairs()
            .iter()
            .map(|(k, v)| {
                if *k == target {
                    (k.clone(), junk.clone())
                } else {
                    (k.clone(), v.clone())
                }
            })
            .collect();

        let mut submit = HoneypotField::new(cfg, RngEntropy::seeded(seed), &clock).unwrap();
        submit.process(Some(&form));
        prop_assert!(!submit.validate());
    }
}

#[test]
fn wire_compatible_control_value() {
    let clock = FixedClock::new(12345);
    let mut form = FormData::new();
    form.insert("first_name", "Ann");
    form.insert("hp_first", "");
    form.insert("hp_second", "");
    form.insert("hp_3third", "");
    form.insert(
        "hp_check_12345",
        compute_control_hash(
            HashScheme::Concat,
            12345,
            "private",
            ["hp_first", "hp_second", "hp_3third"],
        ),
    );

    let mut field =
        HoneypotField::new(TrapConfig::new("private"), RngEntropy::seeded(0), &clock).unwrap();
    field.process(Some(&form));
    assert!(field.validate());
}

#[test]
fn scheme_mismatch_is_rejected() {
    let clock = FixedClock::new(50);
    let mut render = HoneypotField::new(
        TrapConfig::new("k").with_hash_scheme(HashScheme::LengthPrefixed),
        RngEntropy::seeded(1),
        &clock,
    )
    .unwrap();
    render.arm();

    let mut submit =
        HoneypotField::new(TrapConfig::new("k"), RngEntropy::seeded(2), &clock).unwrap();
    submit.process(Some(&echo(render.state())));
    assert!(!submit.validate());
}

#[test]
fn different_secret_is_rejected() {
    let clock = FixedClock::new(50);
    let mut render =
        HoneypotField::new(TrapConfig::new("one"), RngEntropy::seeded(1), &clock).unwrap();
    render.arm();

    let mut submit =
        HoneypotField::new(TrapConfig::new("two"), RngEntropy::seeded(2), &clock).unwrap();
    submit.process(Some(&echo(render.state())));
    assert!(!submit.validate());
}
