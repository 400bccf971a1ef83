//! Browser surface: `wasm-bindgen` exports driving a thread-local engine,
//! plus DOM sync of the info panel.
//!
//! The host page calls `nitroso_init` once, forwards DOM events, and calls
//! `nitroso_frame` from `requestAnimationFrame`. Sphere instances for the
//! page's own rasterizer are read back with `nitroso_instances`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::engine::{InstanceRenderer, NitrosoEngine};
use crate::input::{InputEvent, MouseButton, PanelButton};
use crate::options::Options;
use crate::ui::PanelView;

/// DOM id of the element the panel HTML is written into.
const PANEL_ELEMENT_ID: &str = "nitroso-panel";

struct WebRunner {
    engine: NitrosoEngine,
    renderer: InstanceRenderer,
    synced_panel: Option<PanelView>,
}

impl WebRunner {
    /// Rewrite the panel element, but only when its contents changed.
    fn sync_panel(&mut self) {
        let panel = self.engine.panel();
        if self.synced_panel.as_ref() == Some(&panel) {
            return;
        }
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PANEL_ELEMENT_ID))
        else {
            log::debug!("no #{PANEL_ELEMENT_ID} element; panel not synced");
            return;
        };
        element.set_inner_html(&panel.to_html());
        self.synced_panel = Some(panel);
    }
}

thread_local! {
    static RUNNER: RefCell<Option<WebRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut WebRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(runner) = borrow.as_mut() else {
            log::warn!("nitroso not initialized; call nitroso_init() first");
            return None;
        };
        Some(f(runner))
    })
}

/// Create the engine. `options_toml` may hold a TOML preset; parse errors
/// fall back to defaults with a warning.
#[wasm_bindgen]
pub fn nitroso_init(options_toml: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let options = match options_toml.as_deref().map(Options::from_toml) {
        Some(Ok(options)) => options,
        Some(Err(e)) => {
            log::warn!("{e}; using default options");
            Options::default()
        }
        None => Options::default(),
    };

    let mut runner = WebRunner {
        engine: NitrosoEngine::new(options),
        renderer: InstanceRenderer::new(),
        synced_panel: None,
    };
    runner.sync_panel();
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
    log::info!("nitroso: initialized");
}

/// Run one frame if the frame limiter allows it. Returns whether a frame
/// was drawn.
#[wasm_bindgen]
pub fn nitroso_frame() -> bool {
    with_runner(|r| {
        if !r.engine.should_render() {
            return false;
        }
        let _ = r.engine.frame(&mut r.renderer);
        r.sync_panel();
        true
    })
    .unwrap_or(false)
}

/// Sphere instances from the last frame, `x, y, z, radius, r, g, b, alpha`
/// per instance.
#[wasm_bindgen]
pub fn nitroso_instances() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(r.renderer.instances()))
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

/// Column-major view-projection matrix from the last frame.
#[wasm_bindgen]
pub fn nitroso_view_proj() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(&r.renderer.view_proj()[..]))
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

/// Forward a `KeyboardEvent.code`.
#[wasm_bindgen]
pub fn nitroso_key_down(code: &str) -> bool {
    with_runner(|r| r.engine.handle_key_press(code)).unwrap_or(false)
}

/// Pointer moved to canvas pixel `(x, y)`.
#[wasm_bindgen]
pub fn nitroso_pointer_move(x: f32, y: f32) {
    let _ = with_runner(|r| r.engine.handle_input(InputEvent::CursorMoved { x, y }));
}

/// Primary pointer pressed.
#[wasm_bindgen]
pub fn nitroso_pointer_down() {
    let _ = with_runner(|r| {
        r.engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        })
    });
}

/// Primary pointer released.
#[wasm_bindgen]
pub fn nitroso_pointer_up() {
    let _ = with_runner(|r| {
        r.engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        })
    });
}

/// Pointer left the canvas.
#[wasm_bindgen]
pub fn nitroso_pointer_leave() {
    let _ = with_runner(|r| r.engine.handle_input(InputEvent::CursorLeft));
}

/// Wheel scrolled (positive = zoom in).
#[wasm_bindgen]
pub fn nitroso_scroll(delta: f32) {
    let _ = with_runner(|r| r.engine.handle_input(InputEvent::Scroll { delta }));
}

/// A panel button was clicked: `"previous"` or `"next"`.
#[wasm_bindgen]
pub fn nitroso_button(action: &str) -> bool {
    let button = match action {
        "previous" => PanelButton::Previous,
        "next" => PanelButton::Next,
        other => {
            log::debug!("unknown panel action `{other}`");
            return false;
        }
    };
    with_runner(|r| r.engine.handle_input(InputEvent::Button(button))).unwrap_or(false)
}

/// The canvas was resized.
#[wasm_bindgen]
pub fn nitroso_resize(width: u32, height: u32) {
    let _ = with_runner(|r| r.engine.handle_input(InputEvent::Resized { width, height }));
}

/// Tooltip for the hovered atom.
#[wasm_bindgen]
pub fn nitroso_tooltip() -> Option<String> {
    with_runner(|r| r.engine.hover_tooltip()).flatten()
}

/// Panel contents as JSON, for hosts that render their own panel.
#[wasm_bindgen]
pub fn nitroso_panel_json() -> Option<String> {
    with_runner(|r| r.engine.panel().to_json().ok()).flatten()
}

/// JSON Schema of the tunable options.
#[wasm_bindgen]
pub fn nitroso_options_schema() -> String {
    serde_json::to_string(&Options::json_schema()).unwrap_or_default()
}
