use crate::core::constants::MASTER_GAIN;
use crate::core::{
    master_fade_out, master_recover, schedule_melody, total_beats, GainStep, LazyGraph,
    MelodyNote, ScheduledNote,
};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The shared output: one context and one master gain feeding the speakers.
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub master: web::GainNode,
}

impl AudioGraph {
    fn build() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
        let master = create_gain(&ctx, MASTER_GAIN, "Master")?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect master: {:?}", e))?;
        log::info!("[audio] graph ready (sample rate {} Hz)", ctx.sample_rate());
        Ok(Self { ctx, master })
    }
}

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(ctx).map_err(|e| anyhow::anyhow!("{} GainNode: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

pub fn apply_steps(param: &web::AudioParam, steps: &[GainStep]) {
    for step in steps {
        let time = step.time();
        _ = match *step {
            GainStep::CancelFrom { .. } => param.cancel_scheduled_values(time),
            GainStep::SetAt { value, .. } => param.set_value_at_time(value, time),
            GainStep::LinearTo { value, .. } => param.linear_ramp_to_value_at_time(value, time),
            GainStep::ExponentialTo { value, .. } => {
                param.exponential_ramp_to_value_at_time(value, time)
            }
        };
    }
}

fn ramp_master(graph: &AudioGraph, steps: &[GainStep]) {
    apply_steps(&graph.master.gain(), steps);
    if let Some(last) = steps.last() {
        log::debug!("[audio] master -> {:?} at {:.3}s", last.target(), last.time());
    }
}

/// Melody playback over a lazily built `AudioGraph`.
///
/// The graph is created on the first `play` (which always runs inside a user
/// gesture) and lives until `teardown`.
#[derive(Default)]
pub struct MelodyPlayer {
    graph: LazyGraph<AudioGraph>,
    scratch: Vec<ScheduledNote>,
}

impl MelodyPlayer {
    pub fn ensure_audio_graph(&mut self) -> anyhow::Result<&mut AudioGraph> {
        self.graph.get_or_try_init(AudioGraph::build)
    }

    pub fn play(&mut self, melody: &[MelodyNote], tempo_bpm: f32) -> anyhow::Result<()> {
        let mut notes = std::mem::take(&mut self.scratch);
        notes.clear();
        let graph = self.ensure_audio_graph()?;
        _ = graph.ctx.resume();

        let now = graph.ctx.current_time();
        ramp_master(graph, &master_recover(graph.master.gain().value(), now));

        let end = schedule_melody(melody, tempo_bpm, now, &mut notes);
        for note in &notes {
            if let Err(e) = play_note(&graph.ctx, &graph.master, note) {
                log::warn!("[audio] skipped {}: {:?}", note.pitch.name(), e);
            }
        }
        log::info!(
            "[audio] melody scheduled: {} notes, {} beats, {:.2}s",
            notes.len(),
            total_beats(melody),
            end - now
        );
        self.scratch = notes;
        Ok(())
    }

    /// Fade the master bus to silence. Does nothing before the first `play`.
    pub fn fade_out(&self, duration_sec: f64) {
        if let Some(graph) = self.graph.get() {
            let now = graph.ctx.current_time();
            let current = graph.master.gain().value();
            ramp_master(graph, &master_fade_out(current, now, duration_sec));
        }
    }

    pub fn teardown(&mut self) {
        if let Some(graph) = self.graph.take() {
            _ = graph.master.disconnect();
            match graph.ctx.close() {
                Ok(promise) => spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] close failed: {:?}", e);
                    }
                }),
                Err(e) => log::warn!("[audio] close failed: {:?}", e),
            }
            log::info!("[audio] graph torn down");
        }
    }
}

// One sine oscillator with its own envelope, routed into the master bus
fn play_note(
    ctx: &web::AudioContext,
    master: &web::GainNode,
    note: &ScheduledNote,
) -> anyhow::Result<()> {
    let osc = web::OscillatorNode::new(ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency().set_value(note.frequency_hz);

    let env = create_gain(ctx, 0.0, "Note")?;
    apply_steps(&env.gain(), &note.envelope);

    _ = osc.connect_with_audio_node(&env);
    _ = env.connect_with_audio_node(master);
    _ = osc.start_with_when(note.start_sec);
    _ = osc.stop_with_when(note.stop_sec);
    log::trace!(
        "[audio] {} at {:.3}s for {:.3}s",
        note.pitch.name(),
        note.start_sec,
        note.sounding_sec
    );
    Ok(())
}
