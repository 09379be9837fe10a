use crate::constants::{CAKE_VIEW_ID, HIDDEN_CLASS, HOME_VIEW_ID, LIT_CLASS, PHASE_ATTR, STAGE_ID};
use crate::core::{Phase, View};
use web_sys as web;

#[inline]
fn set_hidden(document: &web::Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if hidden {
            _ = cl.add_1(HIDDEN_CLASS);
            // fallback for pages without the CSS class
            _ = el.set_attribute("style", "display:none");
        } else {
            _ = cl.remove_1(HIDDEN_CLASS);
            _ = el.set_attribute("style", "");
        }
    }
}

pub fn show(document: &web::Document, view: View) {
    set_hidden(document, HOME_VIEW_ID, view != View::Home);
    set_hidden(document, CAKE_VIEW_ID, view != View::Cake);
}

/// Mirror the celebration phase onto the stage so CSS can swap buttons,
/// flames and captions.
pub fn show_phase(document: &web::Document, phase: Phase) {
    if let Some(el) = document.get_element_by_id(STAGE_ID) {
        _ = el.set_attribute(PHASE_ATTR, phase.as_str());
        _ = el.class_list().toggle_with_force(LIT_CLASS, phase.candles_lit());
    }
}
