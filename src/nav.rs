//! Mobile navigation: a slide-in panel plus backdrop overlay, both driven
//! by a single CSS class. Open state lives entirely in the DOM; every
//! operation is a no-op when the panel is missing from the page.

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_ID: &str = "site-nav";
const OVERLAY_ID: &str = "nav-overlay";
const TOGGLE_ID: &str = "nav-toggle";
const OPEN_CLASS: &str = "open";

pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .map(|el| el.class_list().contains(OPEN_CLASS))
        .unwrap_or(false)
}

pub fn open(document: &web::Document) {
    if let Some(panel) = document.get_element_by_id(PANEL_ID) {
        let _ = panel.class_list().add_1(OPEN_CLASS);
        if let Some(overlay) = document.get_element_by_id(OVERLAY_ID) {
            let _ = overlay.class_list().add_1(OPEN_CLASS);
        }
        set_scroll_locked(document, true);
    }
}

pub fn close(document: &web::Document) {
    if let Some(panel) = document.get_element_by_id(PANEL_ID) {
        let _ = panel.class_list().remove_1(OPEN_CLASS);
        if let Some(overlay) = document.get_element_by_id(OVERLAY_ID) {
            let _ = overlay.class_list().remove_1(OPEN_CLASS);
        }
        set_scroll_locked(document, false);
    }
}

pub fn toggle(document: &web::Document) {
    if is_open(document) {
        close(document);
    } else {
        open(document);
    }
}

// The page must not scroll behind an open panel.
fn set_scroll_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

pub fn wire(document: &web::Document) {
    {
        let doc = document.clone();
        dom::add_click_listener(document, TOGGLE_ID, move || toggle(&doc));
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, OVERLAY_ID, move || close(&doc));
    }
    // A tap on any menu link dismisses the panel.
    if let Ok(links) = document.query_selector_all(&format!("#{} a", PANEL_ID)) {
        for i in 0..links.length() {
            if let Some(link) = links.item(i) {
                let doc = document.clone();
                let closure = Closure::wrap(Box::new(move || close(&doc)) as Box<dyn FnMut()>);
                let _ =
                    link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }
}
