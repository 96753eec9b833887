//! Trapezoid Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use trapezoid_runner::Tuning;
    use trapezoid_runner::consts::SIM_DT;
    use trapezoid_runner::platform::{SwipeTracker, key_action};
    use trapezoid_runner::renderer::{Palette, RenderState, SceneBatch, draw_frame};
    use trapezoid_runner::sim::{FixedClock, GameState, TickInput, Viewport, autopilot, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        batch: SceneBatch,
        clock: FixedClock,
        last_time: f64,
        input: TickInput,
        swipe: SwipeTracker,
        /// Autopilot plays when set
        idle_mode: bool,
    }

    impl Game {
        fn new(seed: u64, viewport: Viewport) -> Self {
            Self {
                state: GameState::new(seed, Tuning::default(), viewport),
                render_state: None,
                batch: SceneBatch::new(Palette::default()),
                clock: FixedClock::new(),
                last_time: 0.0,
                input: TickInput::default(),
                swipe: SwipeTracker::new(),
                idle_mode: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let steps = self.clock.advance(dt);
            for _ in 0..steps {
                let mut input = self.input.clone();
                let was_over = self.state.is_game_over();
                if self.idle_mode && !was_over {
                    let auto = autopilot::decide(&self.state);
                    input.jump |= auto.jump;
                    input.crouch |= auto.crouch;
                }
                tick(&mut self.state, &input, SIM_DT);

                // Clear one-shot inputs after processing
                self.input = TickInput::default();

                if was_over && !self.state.is_game_over() {
                    self.restart();
                    break;
                }
            }
        }

        /// A new run begins with no banked time or pending input
        fn restart(&mut self) {
            self.clock.clear();
            self.input = TickInput::default();
        }

        /// Render the current frame
        fn render(&mut self) {
            draw_frame(&self.state, &mut self.batch);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("Score: {}", self.batch.hud.score)));
            }
            if let Some(el) = document.get_element_by_id("hud-speed") {
                el.set_text_content(Some(&format!("Speed: {}", self.batch.hud.speed)));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                match self.batch.game_over {
                    Some(score) => {
                        let _ = el.set_attribute("class", "");
                        if let Some(score_el) = document.get_element_by_id("final-score") {
                            score_el.set_text_content(Some(&score.to_string()));
                        }
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.state.resize(width as f32, height as f32);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }
    }

    /// Window inner size in CSS pixels
    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        (w as u32, h as u32)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Trapezoid Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let viewport = Viewport::new(width as f32, height as f32);
        let game = Rc::new(RefCell::new(Game::new(seed, viewport)));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {:?}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(canvas, game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(game);

        log::info!("Trapezoid Runner running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if code == "KeyI" {
                    g.idle_mode = !g.idle_mode;
                    log::info!("Idle mode: {}", g.idle_mode);
                    return;
                }
                if let Some(action) = key_action(&code) {
                    event.prevent_default();
                    action.apply(&mut g.input);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start: remember where the swipe began
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().swipe.begin(touch.client_y() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: classify the swipe
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let mut g = game.borrow_mut();
                if let Some(action) = g.swipe.end(touch.client_y() as f32) {
                    action.apply(&mut g.input);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = window_size(&window);
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Trapezoid Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");

    let tuning = std::env::args()
        .nth(1)
        .map(|path| load_tuning(&path))
        .unwrap_or_default();

    demo::run(tuning, 0x5eed, 60 * 60 * 2);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Read a JSON tuning file, falling back to defaults on any failure
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> trapezoid_runner::Tuning {
    use trapezoid_runner::Tuning;

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read tuning file {}: {}", path, e);
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Invalid tuning file {}: {}", path, e);
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use trapezoid_runner::Tuning;
    use trapezoid_runner::consts::SIM_DT;
    use trapezoid_runner::renderer::{SceneBatch, draw_frame};
    use trapezoid_runner::sim::{GameState, TickInput, Viewport, autopilot, tick};

    /// Let the autopilot play for `ticks` ticks, restarting after each loss
    pub fn run(tuning: Tuning, seed: u64, ticks: u64) {
        let mut state = GameState::new(seed, tuning, Viewport::new(1280.0, 720.0));
        let mut batch = SceneBatch::default();
        let mut runs = 1u32;
        let mut best = 0u32;
        let restart = TickInput {
            jump: true,
            ..Default::default()
        };

        for _ in 0..ticks {
            if state.is_game_over() {
                best = best.max(state.score);
                runs += 1;
                tick(&mut state, &restart, SIM_DT);
                continue;
            }
            let input = autopilot::decide(&state);
            tick(&mut state, &input, SIM_DT);
            draw_frame(&state, &mut batch);
        }
        best = best.max(state.score);

        log::info!(
            "Demo finished: {} runs, best score {}, last frame {} triangles",
            runs,
            best,
            batch.triangle_count()
        );
        println!("runs: {runs}, best score: {best}");
    }
}
