use crate::core::SurfaceSize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn on_window(
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    EventListener::new(&window, event, handler)
}

pub fn on_click(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<EventListener> {
    let el = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;
    EventListener::new(&el, "click", move |ev: web::Event| {
        ev.stop_propagation();
        handler();
    })
}

/// Resize the canvas backing store to exactly the viewport and report the
/// resulting surface size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
    SurfaceSize::new(canvas.width() as f32, canvas.height() as f32)
}
