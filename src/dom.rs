use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
