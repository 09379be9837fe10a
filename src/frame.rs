use crate::audio::MelodyPlayer;
use crate::core::{
    Celebration, ConfettiField, DrawOp, Effect, Scheduler, Spark, SurfaceSize, HAPPY_BIRTHDAY,
};
use crate::render::Painter;
use crate::views;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Deferred work driven by the frame loop.
#[derive(Clone, Copy, Debug)]
pub enum Cue {
    Spark(Spark),
    WishGranted,
}

/// Everything the cake view owns while mounted.
pub struct FrameContext {
    pub celebration: Celebration,
    pub field: ConfettiField,
    pub surface: SurfaceSize,
    pub scheduler: Scheduler<Cue>,
    pub player: MelodyPlayer,
    pub painter: Painter,
    pub document: web::Document,

    pub started: Instant,
    ops: Vec<DrawOp>,
    cues: Vec<Cue>,
    effects: Vec<Effect>,
    burst_buf: Vec<(f64, Spark)>,
}

impl FrameContext {
    pub fn new(
        celebration: Celebration,
        field: ConfettiField,
        surface: SurfaceSize,
        painter: Painter,
        document: web::Document,
    ) -> Self {
        Self {
            celebration,
            field,
            surface,
            scheduler: Scheduler::new(),
            player: MelodyPlayer::default(),
            painter,
            document,
            started: Instant::now(),
            ops: Vec::new(),
            cues: Vec::new(),
            effects: Vec::new(),
            burst_buf: Vec::new(),
        }
    }

    #[inline]
    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn frame(&mut self) {
        if !self.painter.is_live() {
            return;
        }
        let now = self.now_ms();
        self.ops.clear();
        self.cues.clear();
        if !self.scheduler.is_empty() {
            self.scheduler.drain_due(now, &mut self.cues);
        }

        // Ambient field first, due sparks on top of it until the next clear
        self.field.advance_frame(self.surface, &mut self.ops);
        let mut wish_granted = false;
        for cue in &self.cues {
            match cue {
                Cue::Spark(spark) => self.ops.extend(spark.draw_ops()),
                Cue::WishGranted => wish_granted = true,
            }
        }
        self.painter.paint(&self.ops);

        if wish_granted {
            self.celebration.wish_granted(&mut self.effects);
            self.run_effects();
        }
    }

    pub fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
        log::debug!("[stage] resized to {}x{}", surface.width, surface.height);
    }

    pub fn light(&mut self) {
        self.celebration.light(&mut self.effects);
        self.run_effects();
    }

    pub fn blow(&mut self) {
        self.celebration.blow(&mut self.effects);
        self.run_effects();
    }

    pub fn relight(&mut self) {
        self.celebration.relight(&mut self.effects);
        self.run_effects();
    }

    fn run_effects(&mut self) {
        let now = self.now_ms();
        for effect in std::mem::take(&mut self.effects) {
            match effect {
                Effect::PlayMelody { tempo_bpm } => {
                    if let Err(e) = self.player.play(&HAPPY_BIRTHDAY, tempo_bpm) {
                        log::warn!("[audio] unavailable, continuing without sound: {:?}", e);
                    }
                }
                Effect::Burst => {
                    self.burst_buf.clear();
                    self.field.burst(self.surface.center(), &mut self.burst_buf);
                    self.scheduler.submit_all(
                        now,
                        self.burst_buf.drain(..).map(|(d, s)| (d, Cue::Spark(s))),
                    );
                    log::debug!(
                        "[stage] burst queued, {} pending, next due {:?} ms",
                        self.scheduler.len(),
                        self.scheduler.next_due_ms()
                    );
                }
                Effect::FadeOut { seconds } => self.player.fade_out(seconds),
                Effect::AwaitWish { delay_ms } => {
                    self.scheduler.submit(now, delay_ms, Cue::WishGranted)
                }
            }
        }
        views::show_phase(&self.document, self.celebration.phase());
        log::info!("[stage] phase={}", self.celebration.phase().as_str());
    }

    /// Drop every pending spark and the wish timer, and release the audio graph.
    pub fn teardown(&mut self) {
        let dropped = self.scheduler.cancel_all();
        self.player.teardown();
        log::info!("[stage] torn down, {} pending tasks cancelled", dropped);
    }
}

/// Handle to a running `requestAnimationFrame` loop. Cancelling (or dropping)
/// it stops the loop and frees the callback.
pub struct AnimationLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationLoop {
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's self-reference so it can be freed
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[loop] stopped");
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // A cancelled loop may still receive the callback that was in flight
        if raf_clone.take().is_none() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        raf_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    raf_id.set(request_frame(&tick));
    log::info!("[loop] started");
    AnimationLoop { raf_id, tick }
}
