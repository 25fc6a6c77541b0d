//! Render loop for the background canvas: a self-rescheduling
//! requestAnimationFrame chain. The pending frame id is tracked so a
//! resize can cancel it before starting a fresh chain; exactly one chain
//! is live at any time.

use crate::constants::canvas_height_for_viewport;
use crate::core::ParticleField;
use crate::render;
use crate::theme::ThemeState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "bg-canvas";

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: ParticleField,
    pub theme: Rc<ThemeState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.field.step();
        render::draw(&self.ctx, &self.field, &self.theme.current().palette());
    }

    /// Track the viewport: resize the canvas backing store, then rebuild
    /// the particle set for the new bounds.
    pub fn resize(&mut self) {
        let (w, h) = viewport_canvas_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.field.reseed(w as f32, h as f32);
    }

    /// Full rebuild at the current size. Theme changes re-seed rather than
    /// recolor the existing set.
    pub fn reseed(&mut self) {
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        self.field.reseed(w, h);
    }
}

/// Set up the renderer, or None when the canvas or its 2d context is
/// unavailable (the rest of the page works without the background).
pub fn build(document: &web::Document, theme: Rc<ThemeState>) -> Option<FrameContext> {
    let canvas = document
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    let (w, h) = viewport_canvas_size();
    canvas.set_width(w);
    canvas.set_height(h);

    let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let field = ParticleField::new(w as f32, h as f32, seed);
    Some(FrameContext {
        canvas,
        ctx,
        field,
        theme,
    })
}

fn viewport_canvas_size() -> (u32, u32) {
    let (vw, vh) = web::window()
        .map(|w| {
            let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (vw, vh)
        })
        .unwrap_or((0.0, 0.0));
    let height = canvas_height_for_viewport(vh as f32);
    ((vw as u32).max(1), (height as u32).max(1))
}

/// Start the repaint chain; each tick draws one frame and schedules the
/// next, recording its id in `raf_id`.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, raf_id: Rc<Cell<Option<i32>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }
}

/// Cancel the pending frame, if any; the chain stays stopped until
/// `start_loop` runs again.
pub fn cancel_pending(raf_id: &Cell<Option<i32>>) {
    if let Some(id) = raf_id.take() {
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(id);
        }
    }
}

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>, raf_id: Rc<Cell<Option<i32>>>) {
    let closure = Closure::wrap(Box::new(move || {
        cancel_pending(&raf_id);
        frame_ctx.borrow_mut().resize();
        start_loop(frame_ctx.clone(), raf_id.clone());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
