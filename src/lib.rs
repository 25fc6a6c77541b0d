#![cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod nav;
mod render;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    nav::wire(&document);

    let theme = Rc::new(theme::ThemeState::new());
    theme.load(&document);
    theme::wire(&theme, &document);

    // The background is decorative; without a canvas or a 2d context the
    // nav and theme features still run on their own.
    if let Some(frame_ctx) = frame::build(&document, theme.clone()) {
        let frame_ctx = Rc::new(RefCell::new(frame_ctx));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        {
            let reseed_ctx = frame_ctx.clone();
            theme.subscribe(move |_mode| reseed_ctx.borrow_mut().reseed());
        }

        frame::wire_resize(frame_ctx.clone(), raf_id.clone());
        frame::start_loop(frame_ctx, raf_id);
    }

    Ok(())
}
