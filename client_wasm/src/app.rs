//! Browser scheduler
//!
//! One `Rc<RefCell<App>>` shared by the animation-frame loop, the timer
//! interval and the input handlers. Every scheduled callback carries the epoch
//! of the run that scheduled it and does nothing once that run is over.

use crate::clock::PerformanceClock;
use crate::dom::{self, DomDisplay, SettingsForm};
use crate::input;
use crate::renderer::GpuRenderer;
use game_core::{Config, GameMode, MatchSettings, Params, Session, TickOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, HtmlButtonElement, HtmlCanvasElement, MouseEvent, TouchEvent, Window,
};

pub struct App {
    session: Session,
    renderer: GpuRenderer,
    frame: Option<(i32, Closure<dyn FnMut(f64)>)>,
    // The frame callback currently executing; released when the next one runs
    running_frame: Option<Closure<dyn FnMut(f64)>>,
    timer: Option<(i32, Closure<dyn FnMut()>)>,
}

impl App {
    fn render(&mut self) {
        self.session.draw(&mut self.renderer);
        if let Err(e) = self.renderer.present() {
            log::error!("Frame skipped: {e}");
        }
    }

    /// Drop any pending animation frame and the timer interval
    fn cancel_schedule(&mut self, window: &Window) {
        if let Some((id, _callback)) = self.frame.take() {
            let _ = window.cancel_animation_frame(id);
        }
        if let Some((id, _callback)) = self.timer.take() {
            window.clear_interval_with_handle(id);
        }
    }
}

fn js_error(err: JsValue) -> String {
    format!("{:?}", err)
}

fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window".to_string())
}

/// Build the session for `mode` and wire it to the page
pub async fn launch(mode: GameMode) -> Result<(), String> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| "No document".to_string())?;

    let config = Config::default();
    let canvas: HtmlCanvasElement = dom::element(&document, "pong")?;
    canvas.set_width(config.playfield_width as u32);
    canvas.set_height(config.playfield_height as u32);

    let display = match mode {
        GameMode::Endless => DomDisplay::endless(window.clone(), document.clone())?,
        GameMode::Match => DomDisplay::match_page(window.clone(), document.clone())?,
    };

    let renderer =
        GpuRenderer::new(canvas.clone(), config.playfield_width, config.playfield_height).await?;

    let seed = js_sys::Date::now() as u64;
    let session = Session::new(
        config,
        mode,
        seed,
        Box::new(PerformanceClock::new()),
        Box::new(display),
    );
    log::info!("{:?} session ready (seed {})", mode, seed);

    let app = Rc::new(RefCell::new(App {
        session,
        renderer,
        frame: None,
        running_frame: None,
        timer: None,
    }));

    attach_pointer_input(&canvas, &app)?;

    match mode {
        GameMode::Endless => start_run(&app, MatchSettings::default())?,
        GameMode::Match => {
            attach_controls(&document, &app)?;
            // Show the idle field until the first match starts
            app.borrow_mut().render();
        }
    }

    Ok(())
}

fn start_run(app: &Rc<RefCell<App>>, settings: MatchSettings) -> Result<(), String> {
    let window = window()?;
    let (epoch, timed) = {
        let mut a = app.borrow_mut();
        if !a.session.start(settings) {
            return Ok(());
        }
        a.cancel_schedule(&window);
        (a.session.epoch(), a.session.mode() == GameMode::Match)
    };

    if timed {
        start_timer(app, &window, epoch)?;
    }
    request_frame(app, &window, epoch)
}

fn stop_run(app: &Rc<RefCell<App>>) -> Result<(), String> {
    let window = window()?;
    let mut a = app.borrow_mut();
    if a.session.stop() {
        a.cancel_schedule(&window);
        a.render();
    }
    Ok(())
}

fn request_frame(app: &Rc<RefCell<App>>, window: &Window, epoch: u32) -> Result<(), String> {
    let handle = Rc::clone(app);
    let callback = Closure::once(move |_time: f64| run_frame(handle, epoch));
    let id = window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(js_error)?;
    app.borrow_mut().frame = Some((id, callback));
    Ok(())
}

fn run_frame(app: Rc<RefCell<App>>, epoch: u32) {
    let keep_running = {
        let mut a = app.borrow_mut();
        if a.session.epoch() != epoch {
            // Scheduled by an earlier run
            return;
        }
        if let Some((_id, callback)) = a.frame.take() {
            // The previous frame's callback has returned by now
            drop(a.running_frame.replace(callback));
        }

        let outcome = a.session.tick();
        a.render();
        matches!(outcome, TickOutcome::Continue | TickOutcome::Scored(_))
    };

    let window = match window() {
        Ok(window) => window,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };

    if keep_running {
        if let Err(e) = request_frame(&app, &window, epoch) {
            log::error!("Failed to schedule frame: {e}");
        }
    } else {
        app.borrow_mut().cancel_schedule(&window);
    }
}

fn start_timer(app: &Rc<RefCell<App>>, window: &Window, epoch: u32) -> Result<(), String> {
    let handle = Rc::clone(app);
    let callback = Closure::<dyn FnMut()>::new(move || {
        if let Ok(mut a) = handle.try_borrow_mut() {
            if a.session.epoch() == epoch {
                a.session.sample_timer();
            }
        }
    });
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            Params::TIMER_INTERVAL_MS as i32,
        )
        .map_err(js_error)?;
    app.borrow_mut().timer = Some((id, callback));
    Ok(())
}

fn attach_pointer_input(canvas: &HtmlCanvasElement, app: &Rc<RefCell<App>>) -> Result<(), String> {
    // Mouse move
    {
        let app = Rc::clone(app);
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let y = input::canvas_y(&canvas_clone, event.client_y());
            if let Ok(mut a) = app.try_borrow_mut() {
                a.session.set_left_paddle_target(y);
            }
        });
        canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        closure.forget();
    }

    // Touch move (first touch; non-passive so scrolling can be suppressed)
    {
        let app = Rc::clone(app);
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                let y = input::canvas_y(&canvas_clone, touch.client_y());
                if let Ok(mut a) = app.try_borrow_mut() {
                    a.session.set_left_paddle_target(y);
                }
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        canvas
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(js_error)?;
        closure.forget();
    }

    Ok(())
}

fn attach_controls(document: &web_sys::Document, app: &Rc<RefCell<App>>) -> Result<(), String> {
    let form = SettingsForm::new(document)?;
    let start: HtmlButtonElement = dom::element(document, "start-btn")?;
    let stop: HtmlButtonElement = dom::element(document, "stop-btn")?;

    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if let Err(e) = start_run(&app, form.read()) {
                log::error!("Failed to start match: {e}");
            }
        });
        start
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        closure.forget();
    }

    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if let Err(e) = stop_run(&app) {
                log::error!("Failed to stop match: {e}");
            }
        });
        stop
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        closure.forget();
    }

    Ok(())
}
