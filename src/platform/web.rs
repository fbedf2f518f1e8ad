//! Browser front end
//!
//! Expects a page with a `#canvas` element, `#gravityToggle` and
//! `#collisionToggle` checkboxes, and `#fpsLabel` / `#obs-label` text
//! elements. Missing toggles or labels are skipped with a warning.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlInputElement, MouseEvent,
    Window,
};

use crate::consts::*;
use crate::platform::FpsCounter;
use crate::renderer::{Frame, FrameBuffer, Renderer};
use crate::settings::SimulationConfig;
use crate::sim::{World, tick};
use crate::spawn::{SpawnPattern, spawn};

const BALL_COLOR: &str = "#cb475b";

/// Draws every ball as a filled circle on a 2D canvas
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    fps_label: Option<Element>,
    population_label: Option<Element>,
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(BALL_COLOR);

        for circle in frame.circles {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                circle.center[0] as f64,
                circle.center[1] as f64,
                circle.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }

        if let Some(label) = &self.population_label {
            label.set_text_content(Some(&format!("Objects: {}", frame.population)));
        }
        if let (Some(label), Some(fps)) = (&self.fps_label, frame.fps) {
            label.set_text_content(Some(&format!("FPS: {fps}")));
        }
    }
}

struct App {
    world: World,
    config: SimulationConfig,
    frames: FrameBuffer,
    fps: FpsCounter,
    renderer: CanvasRenderer,
}

impl App {
    fn tick(&mut self) {
        tick(&mut self.world, &self.config, SIM_DT);
        self.fps.record(js_sys::Date::now());

        let frame = self.frames.frame(&self.world, &self.config, self.fps.fps());
        self.renderer.render(&frame);
    }

    /// Click spawn: a ring of balls around the cursor
    fn spawn_at(&mut self, center: Vec2) {
        match spawn(SpawnPattern::default(), center, BALL_MASS, self.config.radius()) {
            Ok(bodies) => self.world.spawn(bodies),
            Err(e) => log::warn!("Spawn rejected: {e}"),
        }
    }
}

/// Wire the page up and start ticking at `FRAME_RATE`
pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or("missing #canvas element")?
        .dyn_into()?;
    let (width, height) = window_size(&window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    let config = SimulationConfig::with_arena(width, height)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app = Rc::new(RefCell::new(App {
        world: World::new(),
        config,
        frames: FrameBuffer::new(),
        fps: FpsCounter::new(),
        renderer: CanvasRenderer {
            canvas: canvas.clone(),
            ctx,
            fps_label: document.get_element_by_id("fpsLabel"),
            population_label: document.get_element_by_id("obs-label"),
        },
    }));

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let center = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            app.borrow_mut().spawn_at(center);
        });
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    bind_toggle(
        &document,
        "gravityToggle",
        app.clone(),
        SimulationConfig::set_gravity_enabled,
    )?;
    bind_toggle(
        &document,
        "collisionToggle",
        app.clone(),
        SimulationConfig::set_collisions_enabled,
    )?;

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = window_size(&window);
            let app = &mut *app.borrow_mut();
            app.renderer.canvas.set_width(width as u32);
            app.renderer.canvas.set_height(height as u32);
            if let Err(e) = app.config.set_arena(width, height) {
                log::warn!("Ignoring resize: {e}");
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut()>::new(move || app.borrow_mut().tick());
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            (1000 / FRAME_RATE) as i32,
        )?;
        closure.forget();
    }

    log::info!("Ballpit running at {width}x{height}");
    Ok(())
}

fn bind_toggle(
    document: &Document,
    id: &str,
    app: Rc<RefCell<App>>,
    apply: fn(&mut SimulationConfig, bool),
) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id(id) else {
        log::warn!("No #{id} toggle on the page");
        return Ok(());
    };
    let input: HtmlInputElement = element.dyn_into()?;

    let target = input.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        apply(&mut app.borrow_mut().config, target.checked());
    });
    input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn window_size(window: &Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(ARENA_WIDTH as f64);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(ARENA_HEIGHT as f64);
    (width as f32, height as f32)
}
