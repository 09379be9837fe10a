// Host-side tests for the light / blow / relight state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod celebration {
    include!("../src/core/celebration.rs");
}

use celebration::*;

fn effects(f: impl FnOnce(&mut Vec<Effect>)) -> Vec<Effect> {
    let mut out = Vec::new();
    f(&mut out);
    out
}

#[test]
fn starts_ready() {
    let c = Celebration::default();
    assert_eq!(c.phase(), Phase::Ready);
    assert!(!c.phase().candles_lit());
    assert_eq!(c.params, CelebrationParams::default());
}

#[test]
fn light_plays_melody_and_bursts_once() {
    let mut c = Celebration::default();
    let out = effects(|o| c.light(o));
    assert_eq!(
        out,
        vec![Effect::PlayMelody { tempo_bpm: 152.0 }, Effect::Burst]
    );
    assert!(c.phase().candles_lit());

    // Already lit: nothing happens
    assert!(effects(|o| c.light(o)).is_empty());
    assert_eq!(c.phase(), Phase::Lit);
}

#[test]
fn blow_fades_immediately_and_waits_for_wish() {
    let mut c = Celebration::default();
    effects(|o| c.light(o));
    let out = effects(|o| c.blow(o));
    assert_eq!(
        out,
        vec![
            Effect::FadeOut { seconds: 1.0 },
            Effect::AwaitWish { delay_ms: 1500.0 }
        ]
    );
    assert_eq!(c.phase(), Phase::Wishing);
    assert!(c.phase().candles_lit(), "candles stay lit while wishing");
}

#[test]
fn wish_granted_blows_out_and_bursts() {
    let mut c = Celebration::default();
    effects(|o| c.light(o));
    effects(|o| c.blow(o));
    let out = effects(|o| c.wish_granted(o));
    assert_eq!(out, vec![Effect::Burst]);
    assert_eq!(c.phase(), Phase::Wished);
    assert!(!c.phase().candles_lit());
}

#[test]
fn out_of_order_actions_are_ignored() {
    let mut c = Celebration::default();
    assert!(effects(|o| c.blow(o)).is_empty());
    assert!(effects(|o| c.wish_granted(o)).is_empty());
    assert_eq!(c.phase(), Phase::Ready);

    effects(|o| c.light(o));
    assert!(effects(|o| c.wish_granted(o)).is_empty());
    effects(|o| c.blow(o));
    assert!(effects(|o| c.blow(o)).is_empty());
    assert!(effects(|o| c.light(o)).is_empty());
    assert!(effects(|o| c.relight(o)).is_empty());
    assert_eq!(c.phase(), Phase::Wishing);
}

#[test]
fn relight_after_wish_starts_over() {
    let mut c = Celebration::default();
    effects(|o| c.light(o));
    effects(|o| c.blow(o));
    effects(|o| c.wish_granted(o));
    let out = effects(|o| c.relight(o));
    assert_eq!(
        out,
        vec![Effect::PlayMelody { tempo_bpm: 152.0 }, Effect::Burst]
    );
    assert_eq!(c.phase(), Phase::Lit);
    assert!(c.phase().candles_lit());
}

#[test]
fn relight_while_lit_is_a_no_op() {
    let mut c = Celebration::default();
    effects(|o| c.light(o));
    assert!(effects(|o| c.relight(o)).is_empty());
    assert_eq!(c.phase(), Phase::Lit);
}

#[test]
fn custom_params_flow_into_effects() {
    let mut c = Celebration::new(CelebrationParams {
        tempo_bpm: 100.0,
        ambient_count: 10,
        fade_out_sec: 2.5,
        wish_delay_ms: 300.0,
    });
    assert_eq!(
        effects(|o| c.light(o))[0],
        Effect::PlayMelody { tempo_bpm: 100.0 }
    );
    assert_eq!(
        effects(|o| c.blow(o)),
        vec![
            Effect::FadeOut { seconds: 2.5 },
            Effect::AwaitWish { delay_ms: 300.0 }
        ]
    );
}

#[test]
fn phase_names_are_distinct() {
    let names = [
        Phase::Ready.as_str(),
        Phase::Lit.as_str(),
        Phase::Wishing.as_str(),
        Phase::Wished.as_str(),
    ];
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
