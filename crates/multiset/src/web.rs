//! Web entry point using ratzilla.
//!
//! This module provides the WASM entry point that uses ratzilla for
//! rendering the same ratatui UI in the browser.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::event::{AppKeyEvent, ClickEvent};

/// Screen identifier from the page URL fragment, e.g. `#insights`.
fn start_screen_from_location() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        // Tab moves card focus instead of browser focus
        if event.key() == "Tab" {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // Prevent the closure from being dropped
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    crate::init_logging_web();

    tracing::info!("Multiset web version starting");

    setup_prevent_default()?;

    let mut app = App::new();
    if let Some(id) = start_screen_from_location() {
        app.open_start_screen(&id);
    }
    let app = Rc::new(RefCell::new(app));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal
        .on_key_event(move |key_event: RatzillaKeyEvent| {
            let key: AppKeyEvent = (&key_event).into();
            let mut app = app_clone.borrow_mut();
            app.handle_key_event(key);
            if app.state().exit {
                // The page cannot close itself
                tracing::info!("Exit requested");
            }
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal
        .on_mouse_event(move |mouse_event| {
            if let Some(click) = ClickEvent::from_web_mouse(&mouse_event) {
                app_clone.borrow_mut().handle_click(click);
            }
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
