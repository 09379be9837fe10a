// Shared visual/audio tuning constants used by the web frontend.

// Ambient confetti field
pub const AMBIENT_PARTICLE_COUNT: usize = 150;
pub const PARTICLE_SIZE_MIN: f32 = 4.0;
pub const PARTICLE_SIZE_MAX: f32 = 10.0;
pub const PARTICLE_VX_MAX: f32 = 1.0; // horizontal drift is symmetric around 0
pub const PARTICLE_VY_MIN: f32 = 1.0;
pub const PARTICLE_VY_MAX: f32 = 4.0;
pub const PARTICLE_SPIN_MAX: f32 = 0.05; // radians per frame, symmetric
pub const RECYCLE_Y: f32 = -10.0; // particles re-enter just above the top edge
pub const CONFETTI_ASPECT: f32 = 0.6; // height / width of an ambient piece
pub const CONFETTI_SATURATION: f32 = 100.0;
pub const CONFETTI_LIGHTNESS: f32 = 60.0;

// Burst
pub const BURST_GROUPS: usize = 3;
pub const BURST_SPARKS_PER_GROUP: usize = 300;
pub const BURST_GROUP_SPACING_MS: f64 = 500.0;
pub const BURST_SPARK_SPACING_MS: f64 = 3.0;
pub const BURST_SPREAD_X: f32 = 400.0; // full width of the landing box
pub const BURST_SPREAD_Y: f32 = 300.0;
pub const SPARK_SIZE_MIN: f32 = 2.0;
pub const SPARK_SIZE_MAX: f32 = 6.0;
pub const SPARK_ASPECT: f32 = 0.8;
pub const SPARK_SATURATION: f32 = 85.0;
pub const SPARK_LIGHTNESS: f32 = 65.0;
pub const GLINT_CHANCE: f64 = 0.3;
pub const GLINT_JITTER: f32 = 10.0; // glint lands within +/- this many px of its spark
pub const GLINT_RADIUS: f32 = 1.0;

// Melody
pub const DEFAULT_TEMPO_BPM: f32 = 152.0;
pub const MELODY_LEAD_IN_SEC: f64 = 0.05;
pub const NOTE_ATTACK_SEC: f64 = 0.02;
pub const NOTE_PEAK_GAIN: f32 = 0.35;
pub const NOTE_SUSTAIN_GAIN: f32 = 0.15;
pub const NOTE_SUSTAIN_AT: f64 = 0.7; // fraction of the sounding duration
pub const NOTE_ARTICULATION: f64 = 0.95; // sounding / nominal duration
pub const NOTE_RELEASE_SLACK_SEC: f64 = 0.02;

// Master bus
pub const MASTER_GAIN: f32 = 0.8;
pub const MASTER_RECOVER_SEC: f64 = 0.02;
pub const SILENCE_GAIN: f32 = 0.0001; // exponential ramps cannot reach 0

// Celebration
pub const WISH_DELAY_MS: f64 = 1500.0;
pub const FADE_OUT_SEC: f64 = 1.0;
