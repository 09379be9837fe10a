use super::constants::*;

/// Named pitches used by the birthday tune.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pitch {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
    D5,
    E5,
    F5,
    G5,
    A5,
}

impl Pitch {
    pub const fn midi(self) -> i32 {
        match self {
            Pitch::C4 => 60,
            Pitch::D4 => 62,
            Pitch::E4 => 64,
            Pitch::F4 => 65,
            Pitch::G4 => 67,
            Pitch::A4 => 69,
            Pitch::B4 => 71,
            Pitch::C5 => 72,
            Pitch::D5 => 74,
            Pitch::E5 => 76,
            Pitch::F5 => 77,
            Pitch::G5 => 79,
            Pitch::A5 => 81,
        }
    }

    #[inline]
    pub fn hz(self) -> f32 {
        midi_to_hz(self.midi() as f32)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Pitch::C4 => "C4",
            Pitch::D4 => "D4",
            Pitch::E4 => "E4",
            Pitch::F4 => "F4",
            Pitch::G4 => "G4",
            Pitch::A4 => "A4",
            Pitch::B4 => "B4",
            Pitch::C5 => "C5",
            Pitch::D5 => "D5",
            Pitch::E5 => "E5",
            Pitch::F5 => "F5",
            Pitch::G5 => "G5",
            Pitch::A5 => "A5",
        }
    }
}

/// Equal-tempered frequency of a (possibly fractional) MIDI note, A4 = 440 Hz.
#[inline]
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}

/// One note of a fixed melody: what to play and for how many beats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MelodyNote {
    pub pitch: Pitch,
    pub beats: f32,
}

const fn note(pitch: Pitch, beats: f32) -> MelodyNote {
    MelodyNote { pitch, beats }
}

pub const HAPPY_BIRTHDAY: [MelodyNote; 25] = [
    note(Pitch::G4, 1.0),
    note(Pitch::G4, 1.0),
    note(Pitch::A4, 2.0),
    note(Pitch::G4, 2.0),
    note(Pitch::C5, 2.0),
    note(Pitch::B4, 4.0),
    note(Pitch::G4, 1.0),
    note(Pitch::G4, 1.0),
    note(Pitch::A4, 2.0),
    note(Pitch::G4, 2.0),
    note(Pitch::D5, 2.0),
    note(Pitch::C5, 4.0),
    note(Pitch::G4, 1.0),
    note(Pitch::G4, 1.0),
    note(Pitch::G5, 2.0),
    note(Pitch::E5, 2.0),
    note(Pitch::C5, 2.0),
    note(Pitch::B4, 2.0),
    note(Pitch::A4, 2.0),
    note(Pitch::F5, 1.0),
    note(Pitch::F5, 1.0),
    note(Pitch::E5, 2.0),
    note(Pitch::C5, 2.0),
    note(Pitch::D5, 2.0),
    note(Pitch::C5, 4.0),
];

pub fn total_beats(melody: &[MelodyNote]) -> f32 {
    melody.iter().map(|n| n.beats).sum()
}

/// A single `AudioParam` automation call, in audio-context seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GainStep {
    /// `cancelScheduledValues(time)`
    CancelFrom { time: f64 },
    /// `setValueAtTime(value, time)`
    SetAt { value: f32, time: f64 },
    /// `linearRampToValueAtTime(value, time)`
    LinearTo { value: f32, time: f64 },
    /// `exponentialRampToValueAtTime(value, time)`; `value` must be > 0
    ExponentialTo { value: f32, time: f64 },
}

impl GainStep {
    pub fn time(&self) -> f64 {
        match *self {
            GainStep::CancelFrom { time }
            | GainStep::SetAt { time, .. }
            | GainStep::LinearTo { time, .. }
            | GainStep::ExponentialTo { time, .. } => time,
        }
    }

    pub fn target(&self) -> Option<f32> {
        match *self {
            GainStep::CancelFrom { .. } => None,
            GainStep::SetAt { value, .. }
            | GainStep::LinearTo { value, .. }
            | GainStep::ExponentialTo { value, .. } => Some(value),
        }
    }
}

/// A melody note resolved onto the audio timeline.
///
/// - `start_sec`: when the oscillator starts
/// - `nominal_sec`: the note's full slot; the next note starts after it
/// - `sounding_sec`: audible part of the slot (`NOTE_ARTICULATION` of nominal)
/// - `stop_sec`: absolute oscillator stop time, a little after the envelope ends
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledNote {
    pub pitch: Pitch,
    pub frequency_hz: f32,
    pub start_sec: f64,
    pub nominal_sec: f64,
    pub sounding_sec: f64,
    pub stop_sec: f64,
    pub envelope: [GainStep; 4],
}

impl ScheduledNote {
    #[inline]
    pub fn end_sec(&self) -> f64 {
        self.start_sec + self.nominal_sec
    }
}

/// Tempos that cannot give a finite positive beat fall back to the default.
pub fn effective_tempo(tempo_bpm: f32) -> f32 {
    if tempo_bpm.is_finite() && tempo_bpm > 0.0 {
        tempo_bpm
    } else {
        DEFAULT_TEMPO_BPM
    }
}

#[inline]
pub fn seconds_per_beat(tempo_bpm: f32) -> f64 {
    60.0 / effective_tempo(tempo_bpm) as f64
}

fn note_envelope(start: f64, sounding: f64) -> [GainStep; 4] {
    [
        GainStep::SetAt {
            value: SILENCE_GAIN,
            time: start,
        },
        GainStep::LinearTo {
            value: NOTE_PEAK_GAIN,
            time: start + NOTE_ATTACK_SEC,
        },
        GainStep::ExponentialTo {
            value: NOTE_SUSTAIN_GAIN,
            time: start + sounding * NOTE_SUSTAIN_AT,
        },
        GainStep::ExponentialTo {
            value: SILENCE_GAIN,
            time: start + sounding,
        },
    ]
}

/// Lay `melody` out back to back starting `MELODY_LEAD_IN_SEC` after `now_sec`.
///
/// Appends one `ScheduledNote` per melody note and returns the time the last
/// note's slot ends.
pub fn schedule_melody(
    melody: &[MelodyNote],
    tempo_bpm: f32,
    now_sec: f64,
    out: &mut Vec<ScheduledNote>,
) -> f64 {
    let beat = seconds_per_beat(tempo_bpm);
    let mut t = now_sec + MELODY_LEAD_IN_SEC;
    out.reserve(melody.len());
    for n in melody {
        let nominal = n.beats as f64 * beat;
        let sounding = nominal * NOTE_ARTICULATION;
        let note = ScheduledNote {
            pitch: n.pitch,
            frequency_hz: n.pitch.hz(),
            start_sec: t,
            nominal_sec: nominal,
            sounding_sec: sounding,
            stop_sec: t + sounding + NOTE_RELEASE_SLACK_SEC,
            envelope: note_envelope(t, sounding),
        };
        t = note.end_sec();
        out.push(note);
    }
    t
}

/// Master automation that undoes a fade: cancel whatever is pending and ramp
/// from the current value back to `MASTER_GAIN` within `MASTER_RECOVER_SEC`.
pub fn master_recover(current: f32, now_sec: f64) -> [GainStep; 3] {
    [
        GainStep::CancelFrom { time: now_sec },
        GainStep::SetAt {
            value: current,
            time: now_sec,
        },
        GainStep::LinearTo {
            value: MASTER_GAIN,
            time: now_sec + MASTER_RECOVER_SEC,
        },
    ]
}

/// Master automation for a fade to (near) silence over `duration_sec`.
pub fn master_fade_out(current: f32, now_sec: f64, duration_sec: f64) -> [GainStep; 3] {
    [
        GainStep::CancelFrom { time: now_sec },
        GainStep::SetAt {
            value: current.max(SILENCE_GAIN),
            time: now_sec,
        },
        GainStep::ExponentialTo {
            value: SILENCE_GAIN,
            time: now_sec + duration_sec.max(0.0),
        },
    ]
}
