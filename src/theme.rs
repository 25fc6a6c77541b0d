//! Theme controller: decides the visual mode, applies it to the document,
//! and persists explicit user choices.
//!
//! A stored value always wins. Until one exists the controller follows the
//! OS color-scheme preference, including live changes; the first explicit
//! toggle writes the key and ends that auto-follow (checked at event time,
//! so clearing site data restores it).

use crate::core::ThemeMode;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const STORAGE_KEY: &str = "site-theme";
const TOGGLE_ID: &str = "theme-toggle";
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Owns the active mode; the renderer only reads it (directly via
/// `current` each frame, and through `subscribe` for reseeding).
pub struct ThemeState {
    mode: Cell<ThemeMode>,
    on_change: RefCell<Vec<Box<dyn Fn(ThemeMode)>>>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            mode: Cell::new(ThemeMode::Dark),
            on_change: RefCell::new(Vec::new()),
        }
    }

    pub fn current(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Register a callback fired on every mode change after the document
    /// has been updated.
    pub fn subscribe(&self, callback: impl Fn(ThemeMode) + 'static) {
        self.on_change.borrow_mut().push(Box::new(callback));
    }

    /// Set the document-wide mode marker, refresh the toggle control, then
    /// notify subscribers. Does not persist anything.
    pub fn apply(&self, document: &web::Document, mode: ThemeMode) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", mode.as_str());
        }
        update_toggle_button(document, mode);
        self.mode.set(mode);
        for callback in self.on_change.borrow().iter() {
            callback(mode);
        }
    }

    /// Startup: apply the stored choice if one exists, otherwise the OS
    /// preference (without persisting, so the OS keeps driving it).
    pub fn load(&self, document: &web::Document) {
        let mode = stored_mode().unwrap_or_else(|| {
            if prefers_dark() {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        });
        self.apply(document, mode);
    }

    /// Explicit user toggle: flip, apply, persist.
    pub fn toggle(&self, document: &web::Document) {
        let next = self.current().opposite();
        self.apply(document, next);
        persist(next);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

fn update_toggle_button(document: &web::Document, mode: ThemeMode) {
    if let Some(button) = document.get_element_by_id(TOGGLE_ID) {
        let _ = button.set_attribute(
            "aria-pressed",
            if mode == ThemeMode::Dark { "true" } else { "false" },
        );
        // The icon shows the mode a click switches to.
        button.set_text_content(Some(match mode {
            ThemeMode::Dark => "\u{2600}",
            ThemeMode::Light => "\u{1F319}",
        }));
    }
}

pub fn stored_mode() -> Option<ThemeMode> {
    dom::local_storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|v| ThemeMode::parse(&v))
}

fn persist(mode: ThemeMode) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(STORAGE_KEY, mode.as_str());
    }
}

fn prefers_dark() -> bool {
    web::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn wire(theme: &Rc<ThemeState>, document: &web::Document) {
    {
        let theme = theme.clone();
        let doc = document.clone();
        dom::add_click_listener(document, TOGGLE_ID, move || theme.toggle(&doc));
    }
    // Follow OS preference changes while no explicit choice is stored.
    if let Some(window) = web::window() {
        if let Ok(Some(query)) = window.match_media(PREFERS_DARK_QUERY) {
            let theme = theme.clone();
            let doc = document.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
                if stored_mode().is_none() {
                    let mode = if ev.matches() {
                        ThemeMode::Dark
                    } else {
                        ThemeMode::Light
                    };
                    theme.apply(&doc, mode);
                }
            }) as Box<dyn FnMut(_)>);
            let _ =
                query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
