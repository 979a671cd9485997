#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::constants::*;
use holo_core::{BrainScene, CanvasSize, Engine, ThemeId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod format;
mod frame;
mod input;
mod status;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("holo-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Either canvas may be absent from a given page.
    if let Err(e) = start_brain(&document) {
        log::warn!("hero brain disabled: {:?}", e);
    }
    if let Err(e) = start_classroom(&document) {
        log::warn!("classroom disabled: {:?}", e);
    }
    Ok(())
}

fn start_brain(document: &web::Document) -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(document, BRAIN_CANVAS_ID)?;
    let surface = CanvasSurface::new(canvas.clone())?;
    let size = surface.css_size();
    let brain = Rc::new(RefCell::new(BrainScene::new(
        CanvasSize::new(size.x, size.y),
        BRAIN_SEED,
    )));
    let surface = Rc::new(RefCell::new(surface));

    let frames = {
        let (brain, surface) = (brain.clone(), surface.clone());
        frame::install(move |dt| {
            let mut brain = brain.borrow_mut();
            let mut surface = surface.borrow_mut();
            brain.update(dt);
            surface.begin_frame();
            brain.draw(&mut *surface);
        })
    };

    events::wire_brain_pointer(&canvas, brain.clone());
    dom::on_window_resize(move || {
        let size = surface.borrow_mut().resize();
        brain.borrow_mut().resize(size.x, size.y);
    });

    // The hero sits at the top of the page and always animates.
    frames.borrow_mut().start();
    Ok(())
}

fn start_classroom(document: &web::Document) -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(document, VR_CANVAS_ID)?;
    let surface = CanvasSurface::new(canvas.clone())?;
    let size = surface.css_size();
    let engine = Rc::new(RefCell::new(Engine::create(
        CanvasSize::new(size.x, size.y),
        ThemeId::Classroom,
    )));
    let surface = Rc::new(RefCell::new(surface));
    let panel = Rc::new(RefCell::new(status::StatusPanel::new(document.clone())));
    {
        let p = panel.borrow();
        let e = engine.borrow();
        p.show_theme(e.theme());
        p.show_counts(&e);
    }

    let frames = {
        let (engine, surface, panel) = (engine.clone(), surface.clone(), panel.clone());
        frame::install(move |dt| {
            let mut engine = engine.borrow_mut();
            let mut surface = surface.borrow_mut();
            surface.begin_frame();
            if engine.frame(dt, &mut *surface) {
                panel.borrow_mut().tick(dt, &engine);
            }
        })
    };

    events::wire_classroom(&events::ClassroomWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        engine: engine.clone(),
        panel,
    });

    {
        let (engine, surface) = (engine.clone(), surface.clone());
        dom::on_window_resize(move || {
            let size = surface.borrow_mut().resize();
            engine.borrow_mut().resize(size.x, size.y);
        });
    }

    // Only animate while the classroom is on screen.
    frame::observe_visibility(&canvas, move |visible| {
        if visible {
            engine.borrow_mut().start();
            frames.borrow_mut().start();
        } else {
            frames.borrow_mut().stop();
            engine.borrow_mut().stop();
        }
    })
}
