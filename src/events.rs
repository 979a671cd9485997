use crate::constants::*;
use crate::dom;
use crate::input;
use crate::status::StatusPanel;
use glam::Vec2;
use holo_core::{BrainScene, Engine, ShapeKind};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ClassroomWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<Engine>>,
    pub panel: Rc<RefCell<StatusPanel>>,
}

pub fn wire_classroom(w: &ClassroomWiring) {
    wire_pointer(w);
    wire_env_buttons(w);
    wire_spawn_buttons(w);
    wire_view_buttons(w);
}

fn local(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    input::pointer_local(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

// ---------------- Pointer ----------------

fn wire_pointer(w: &ClassroomWiring) {
    let target: &web::EventTarget = w.canvas.as_ref();

    let (engine, panel, canvas) = (w.engine.clone(), w.panel.clone(), w.canvas.clone());
    dom::on_mouse_event(target, "pointermove", move |ev| {
        let p = local(&ev, &canvas);
        engine.borrow_mut().on_pointer_move(p.x, p.y);
        panel.borrow().show_pointer(p);
    });

    let (engine, canvas) = (w.engine.clone(), w.canvas.clone());
    dom::on_mouse_event(target, "pointerdown", move |ev| {
        let p = local(&ev, &canvas);
        engine.borrow_mut().on_pointer_down(p.x, p.y);
    });

    let engine = w.engine.clone();
    dom::on_mouse_event(target, "pointerup", move |_| {
        engine.borrow_mut().on_pointer_up();
    });

    let engine = w.engine.clone();
    dom::on_mouse_event(target, "pointerleave", move |_| {
        engine.borrow_mut().on_pointer_leave();
    });

    let (engine, canvas) = (w.engine.clone(), w.canvas.clone());
    dom::on_mouse_event(target, "click", move |ev| {
        let p = local(&ev, &canvas);
        if let Some(id) = engine.borrow_mut().on_click(p.x, p.y) {
            log::debug!("[pointer] select {id}");
        }
    });
}

// ---------------- Controls ----------------

fn wire_env_buttons(w: &ClassroomWiring) {
    let buttons = dom::query_all(&w.document, ENV_BUTTON_SELECTOR);
    for (i, btn) in buttons.iter().enumerate() {
        let env = btn.get_attribute("data-env").unwrap_or_default();
        let (engine, panel, all) = (w.engine.clone(), w.panel.clone(), buttons.clone());
        dom::on_click(btn, move |_| {
            let mut e = engine.borrow_mut();
            e.set_theme_by_name(&env);
            panel.borrow().show_theme(e.theme());
            for (j, b) in all.iter().enumerate() {
                dom::set_class(b, ACTIVE_CLASS, i == j);
            }
        });
    }
}

fn wire_spawn_buttons(w: &ClassroomWiring) {
    for btn in dom::query_all(&w.document, SPAWN_BUTTON_SELECTOR) {
        let shape = btn.get_attribute("data-shape").unwrap_or_default();
        let kind = ShapeKind::parse_lossy(&shape);
        let (engine, panel) = (w.engine.clone(), w.panel.clone());
        dom::on_click(&btn, move |_| {
            let mut e = engine.borrow_mut();
            e.spawn(kind, None);
            panel.borrow().show_counts(&e);
        });
    }
}

fn wire_view_buttons(w: &ClassroomWiring) {
    let d = &w.document;

    let (engine, panel) = (w.engine.clone(), w.panel.clone());
    dom::add_click_listener(d, CLEAR_BUTTON_ID, move |_| {
        let mut e = engine.borrow_mut();
        e.clear_spawned();
        panel.borrow().show_counts(&e);
    });

    let engine = w.engine.clone();
    dom::add_click_listener(d, ORBIT_BUTTON_ID, move |el| {
        let mut e = engine.borrow_mut();
        let on = !e.auto_orbit();
        e.set_auto_orbit(on);
        dom::set_class(el, ACTIVE_CLASS, on);
    });

    let engine = w.engine.clone();
    dom::add_click_listener(d, ZOOM_IN_BUTTON_ID, move |_| engine.borrow_mut().zoom_in());
    let engine = w.engine.clone();
    dom::add_click_listener(d, ZOOM_OUT_BUTTON_ID, move |_| engine.borrow_mut().zoom_out());

    let engine = w.engine.clone();
    dom::add_click_listener(d, GRID_BUTTON_ID, move |el| {
        let mut e = engine.borrow_mut();
        let on = !e.toggles().grid;
        e.set_grid_visible(on);
        dom::set_class(el, ACTIVE_CLASS, on);
    });

    let (engine, panel) = (w.engine.clone(), w.panel.clone());
    dom::add_click_listener(d, PARTICLES_BUTTON_ID, move |el| {
        let mut e = engine.borrow_mut();
        let on = !e.toggles().particles;
        e.set_particles_visible(on);
        dom::set_class(el, ACTIVE_CLASS, on);
        panel.borrow().show_counts(&e);
    });

    let engine = w.engine.clone();
    dom::add_click_listener(d, SCANLINES_BUTTON_ID, move |el| {
        let mut e = engine.borrow_mut();
        let on = !e.toggles().scanlines;
        e.set_scanlines_visible(on);
        dom::set_class(el, ACTIVE_CLASS, on);
    });

    let engine = w.engine.clone();
    dom::add_click_listener(d, PLAY_PAUSE_BUTTON_ID, move |el| {
        let mut e = engine.borrow_mut();
        let paused = !e.is_paused();
        e.set_paused(paused);
        dom::set_class(el, "paused", paused);
        log::info!("[engine] {}", if paused { "paused" } else { "resumed" });
    });
}

// ---------------- Hero brain ----------------

/// The brain follows the pointer anywhere over its container, not just the
/// canvas itself.
pub fn wire_brain_pointer(canvas: &web::HtmlCanvasElement, brain: Rc<RefCell<BrainScene>>) {
    let area: web::Element = match canvas.parent_element() {
        Some(parent) => parent,
        None => canvas.clone().into(),
    };
    let target: &web::EventTarget = area.as_ref();

    let (b, c) = (brain.clone(), canvas.clone());
    dom::on_mouse_event(target, "pointermove", move |ev| {
        let p = local(&ev, &c);
        b.borrow_mut().on_pointer_move(p.x, p.y);
    });

    dom::on_mouse_event(target, "pointerleave", move |_| {
        brain.borrow_mut().on_pointer_leave();
    });
}
