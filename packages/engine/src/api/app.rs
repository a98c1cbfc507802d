use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

use crate::domain::{SandboxConfig, TileKind};
use crate::error::{Result, SandboxError};
use crate::render::{extract_shapes, CanvasRenderer, Palette};
use crate::simulation::SandboxCore;

use super::dom::DomBindings;

struct AppState {
    core: RefCell<SandboxCore>,
    dom: DomBindings,
    renderer: CanvasRenderer,
    step_interval_ms: i32,
}

/// The running sandbox: controller + page bindings.
///
/// Built once at startup. Each DOM listener holds a clone of the shared state,
/// so the app lives as long as the page does.
pub struct SandboxApp {
    state: Rc<AppState>,
}

impl SandboxApp {
    pub fn new(dom: DomBindings, config: &SandboxConfig) -> Result<Self> {
        let renderer = CanvasRenderer::new(
            dom.context_2d()?,
            config.canvas_width,
            config.canvas_height,
            Palette::from_config(config),
        );

        let state = Rc::new(AppState {
            core: RefCell::new(SandboxCore::with_config(config)),
            dom,
            renderer,
            step_interval_ms: config.step_interval_ms(),
        });

        state.dom.selection.set_selected_index(TileKind::default().index() as i32);
        state.dom.sync_mode(false);

        attach_listeners(&state)?;
        Ok(Self { state })
    }

    /// Start the render loop and the physics step loop. Neither ever stops.
    pub fn run(&self) -> Result<()> {
        start_render_loop(self.state.clone())?;
        start_step_loop(self.state.clone())?;
        log::info!("sandbox running");
        Ok(())
    }

    pub fn tile_count(&self) -> usize {
        self.state.core.borrow().tile_count()
    }

    pub fn is_running(&self) -> bool {
        self.state.core.borrow().mode().is_running()
    }

    /// Borrow the controller (tests and debugging)
    pub fn with_core<R>(&self, f: impl FnOnce(&mut SandboxCore) -> R) -> R {
        f(&mut self.state.core.borrow_mut())
    }
}

fn attach_listeners(state: &Rc<AppState>) -> Result<()> {
    let dom = &state.dom;

    {
        let st = state.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            st.core
                .borrow_mut()
                .handle_pointer_event(e.offset_x() as f32, e.offset_y() as f32, e.button());
        }));
        dom.canvas
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }

    // Secondary click removes tiles; keep the browser menu out of the way.
    {
        let contextmenu = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
        }));
        dom.canvas.add_event_listener_with_callback(
            "contextmenu",
            contextmenu.as_ref().unchecked_ref(),
        )?;
        contextmenu.forget();
    }

    {
        let st = state.clone();
        let onchange = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            let value = st.dom.selection.value();
            match value.trim().parse::<i32>().ok().and_then(TileKind::from_index) {
                Some(kind) => {
                    st.core.borrow_mut().set_tile_kind(kind);
                }
                None => log::warn!("ignoring unknown tile kind {:?}", value),
            }
        }));
        dom.selection
            .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let st = state.clone();
        let onstart = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            let running = {
                let mut core = st.core.borrow_mut();
                core.start_simulation();
                core.mode().is_running()
            };
            st.dom.sync_mode(running);
        }));
        dom.start
            .add_event_listener_with_callback("click", onstart.as_ref().unchecked_ref())?;
        onstart.forget();
    }

    {
        let st = state.clone();
        let onstop = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            let running = {
                let mut core = st.core.borrow_mut();
                core.stop_simulation();
                core.mode().is_running()
            };
            st.dom.sync_mode(running);
        }));
        dom.stop
            .add_event_listener_with_callback("click", onstop.as_ref().unchecked_ref())?;
        onstop.forget();
    }

    Ok(())
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32> {
    let window = web_sys::window().ok_or(SandboxError::NoWindow)?;
    Ok(window.request_animation_frame(f.as_ref().unchecked_ref())?)
}

fn start_render_loop(state: Rc<AppState>) -> Result<()> {
    type RafClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let shapes = extract_shapes(&state.core.borrow());
        if let Err(err) = state.renderer.draw(&shapes) {
            log::error!("draw failed: {:?}", err);
        }
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(err) = request_animation_frame(cb) {
                log::error!("render loop halted: {}", err);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = g.borrow();
    match first.as_ref() {
        Some(cb) => request_animation_frame(cb).map(|_| ()),
        None => Ok(()),
    }
}

fn start_step_loop(state: Rc<AppState>) -> Result<()> {
    let window = web_sys::window().ok_or(SandboxError::NoWindow)?;
    let interval = state.step_interval_ms;

    let tick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        state.core.borrow_mut().step();
    }));
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval,
    )?;
    tick.forget();
    Ok(())
}
