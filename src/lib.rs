#![cfg(target_arch = "wasm32")]
use crate::core::lifecycle::{pagehide_tears_down, view_for};
use crate::core::{Celebration, CelebrationParams, ConfettiField};
use crate::dom::EventListener;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod frame;
mod render;
mod views;

use constants::{CANVAS_ID, HOME_VIEW_ID, LIGHT_BUTTON_ID, RELIGHT_BUTTON_ID, WISH_BUTTON_ID};

/// The cake view while it is on screen. Dropping it stops the loop and
/// unregisters every listener.
struct Mounted {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    animation: frame::AnimationLoop,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    // Landing-page and page-lifecycle listeners live for the whole page
    static PAGE_LISTENERS: RefCell<Vec<EventListener>> = const { RefCell::new(Vec::new()) };
}

fn wire_action(
    document: &web::Document,
    element_id: &str,
    frame_ctx: &Rc<RefCell<frame::FrameContext>>,
    action: fn(&mut frame::FrameContext),
) -> anyhow::Result<EventListener> {
    let frame_ctx = frame_ctx.clone();
    dom::on_click(document, element_id, move || {
        action(&mut frame_ctx.borrow_mut());
    })
}

fn mount(document: &web::Document, params: CelebrationParams) -> anyhow::Result<Mounted> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let surface = dom::sync_canvas_to_viewport(&canvas);
    let painter = render::Painter::new(&canvas)?;
    let field = ConfettiField::with_rng(params.ambient_count, surface, StdRng::from_entropy());
    log::info!(
        "[stage] mounted {}x{} with {} particles",
        surface.width,
        surface.height,
        field.len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        Celebration::new(params),
        field,
        surface,
        painter,
        document.clone(),
    )));
    views::show_phase(document, frame_ctx.borrow().celebration.phase());

    let mut listeners = Vec::with_capacity(4);
    {
        let frame_ctx = frame_ctx.clone();
        listeners.push(dom::on_window("resize", move |_| {
            let mut ctx = frame_ctx.borrow_mut();
            let surface = dom::sync_canvas_to_viewport(ctx.painter.canvas());
            ctx.resize(surface);
        })?);
    }
    for (id, action) in [
        (LIGHT_BUTTON_ID, frame::FrameContext::light as fn(&mut frame::FrameContext)),
        (WISH_BUTTON_ID, frame::FrameContext::blow),
        (RELIGHT_BUTTON_ID, frame::FrameContext::relight),
    ] {
        listeners.push(wire_action(document, id, &frame_ctx, action)?);
    }

    let animation = frame::start_loop(frame_ctx.clone());
    Ok(Mounted {
        frame_ctx,
        animation,
        _listeners: listeners,
    })
}

fn reveal_cake() {
    let Some(document) = dom::window_document() else {
        return;
    };
    if MOUNTED.with(|m| m.borrow().is_some()) {
        return;
    }
    views::show(&document, view_for(true));
    match mount(&document, CelebrationParams::default()) {
        Ok(mounted) => MOUNTED.with(|m| *m.borrow_mut() = Some(mounted)),
        Err(e) => {
            log::error!("mount error: {:?}", e);
            views::show(&document, view_for(false));
        }
    }
}

/// Tear the cake view down: stop the animation loop, unregister listeners,
/// cancel pending bursts and close the audio context. The landing view comes
/// back so the cake can be mounted again.
#[wasm_bindgen]
pub fn unmount() {
    let Some(mounted) = MOUNTED.with(|m| m.borrow_mut().take()) else {
        return;
    };
    mounted.animation.cancel();
    mounted.frame_ctx.borrow_mut().teardown();
    drop(mounted);
    if let Some(document) = dom::window_document() {
        views::show(&document, view_for(false));
    }
    log::info!("[stage] unmounted");
}

fn on_pagehide(ev: web::Event) {
    let persisted = ev
        .dyn_ref::<web::PageTransitionEvent>()
        .is_some_and(|e| e.persisted());
    if pagehide_tears_down(persisted) {
        unmount();
    } else {
        log::info!("[stage] page cached, keeping cake mounted");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("birthday-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    views::show(&document, view_for(false));

    let home = dom::on_click(&document, HOME_VIEW_ID, reveal_cake)?;
    let pagehide = dom::on_window("pagehide", on_pagehide)?;
    PAGE_LISTENERS.with(|l| l.borrow_mut().extend([home, pagehide]));
    Ok(())
}
