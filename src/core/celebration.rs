use super::constants::*;

/// Where the cake is in its little story.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Candles unlit, nothing played yet.
    #[default]
    Ready,
    /// Candles burning, melody playing.
    Lit,
    /// Candles still lit while the wish is being made.
    Wishing,
    /// Candles out, wish made.
    Wished,
}

impl Phase {
    /// Value written to the stage's `data-phase` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Lit => "lit",
            Phase::Wishing => "wishing",
            Phase::Wished => "wished",
        }
    }

    /// Candles keep burning until the wish has been made.
    pub const fn candles_lit(self) -> bool {
        matches!(self, Phase::Lit | Phase::Wishing)
    }
}

/// Side effects requested by a transition, executed by the browser shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    PlayMelody { tempo_bpm: f32 },
    Burst,
    FadeOut { seconds: f64 },
    /// Call `wish_granted` after `delay_ms`.
    AwaitWish { delay_ms: f64 },
}

/// Tunables for a celebration. Defaults match the shipped page.
#[derive(Clone, Debug, PartialEq)]
pub struct CelebrationParams {
    pub tempo_bpm: f32,
    pub ambient_count: usize,
    pub fade_out_sec: f64,
    pub wish_delay_ms: f64,
}

impl Default for CelebrationParams {
    fn default() -> Self {
        Self {
            tempo_bpm: DEFAULT_TEMPO_BPM,
            ambient_count: AMBIENT_PARTICLE_COUNT,
            fade_out_sec: FADE_OUT_SEC,
            wish_delay_ms: WISH_DELAY_MS,
        }
    }
}

/// State machine behind the three buttons.
///
/// Each action appends the effects it wants into `out`; an action that does
/// not apply to the current phase appends nothing.
#[derive(Clone, Debug, Default)]
pub struct Celebration {
    pub params: CelebrationParams,
    phase: Phase,
}

impl Celebration {
    pub fn new(params: CelebrationParams) -> Self {
        Self {
            params,
            phase: Phase::Ready,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn light(&mut self, out: &mut Vec<Effect>) {
        match self.phase {
            Phase::Ready | Phase::Wished => {
                self.phase = Phase::Lit;
                out.push(Effect::PlayMelody {
                    tempo_bpm: self.params.tempo_bpm,
                });
                out.push(Effect::Burst);
            }
            Phase::Lit | Phase::Wishing => {}
        }
    }

    /// Start the wish. The fade begins right away; the candles go out once
    /// the wish delay elapses and `wish_granted` is called.
    pub fn blow(&mut self, out: &mut Vec<Effect>) {
        if self.phase != Phase::Lit {
            return;
        }
        self.phase = Phase::Wishing;
        out.push(Effect::FadeOut {
            seconds: self.params.fade_out_sec,
        });
        out.push(Effect::AwaitWish {
            delay_ms: self.params.wish_delay_ms,
        });
    }

    pub fn wish_granted(&mut self, out: &mut Vec<Effect>) {
        if self.phase != Phase::Wishing {
            return;
        }
        self.phase = Phase::Wished;
        out.push(Effect::Burst);
    }

    pub fn relight(&mut self, out: &mut Vec<Effect>) {
        if self.phase == Phase::Wishing {
            return;
        }
        if self.phase == Phase::Wished {
            self.phase = Phase::Ready;
        }
        self.light(out);
    }
}
