// DOM hooks the page markup must provide.
//
// The element ids and attribute names below are the whole contract between
// the wasm module and `index.html`; everything visual lives in CSS.

// Views
pub const HOME_VIEW_ID: &str = "home";
pub const CAKE_VIEW_ID: &str = "cake";
pub const STAGE_ID: &str = "stage";

// Drawing surface
pub const CANVAS_ID: &str = "confetti-canvas";

// Buttons
pub const LIGHT_BUTTON_ID: &str = "light-button";
pub const WISH_BUTTON_ID: &str = "wish-button";
pub const RELIGHT_BUTTON_ID: &str = "relight-button";

// Styling hooks
pub const HIDDEN_CLASS: &str = "hidden";
pub const PHASE_ATTR: &str = "data-phase";
pub const LIT_CLASS: &str = "lit";
