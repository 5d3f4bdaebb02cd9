//! Statue Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, HtmlElement};

    use statue_run::assets::{AssetEvent, apply_asset_event};
    use statue_run::consts::*;
    use statue_run::sim::{GameState, TickInput, tick};
    use statue_run::{Settings, ui};

    /// URL of the doll's model, served next to the page
    const MODEL_URL: &str = "model/scene.gltf";

    /// Horizontal margin (world units) kept around the track when scaling
    const VIEW_MARGIN: f32 = 1.0;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        /// Screen pixels per world unit, recomputed on resize
        px_per_unit: f32,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed),
                settings,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                px_per_unit: 100.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        fn set_viewport_width(&mut self, width_px: f32) {
            let world_width = self.state.track.length() + VIEW_MARGIN * 2.0;
            self.px_per_unit = width_px / world_width;
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot edges after processing
                self.input.run_down = false;
                self.input.run_up = false;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Mirror sim state into the DOM scene
        fn update_scene(&self, document: &Document) {
            // Doll placement and orientation
            if let Some(el) = style_of(document, "doll") {
                let _ = el.style().set_property(
                    "transform",
                    &format!(
                        "translateY({}px) rotateY({}rad) scale({})",
                        -DOLL_OFFSET_Y * self.px_per_unit,
                        self.state.doll.rot_y,
                        DOLL_SCALE
                    ),
                );
            }

            // Track geometry (repositioned here so resize picks it up)
            let track_ids = ["track-bar", "post-start", "post-end"];
            for (cube, id) in self.state.track.cubes.iter().zip(track_ids) {
                if let Some(el) = style_of(document, id) {
                    let style = el.style();
                    let _ = style.set_property(
                        "width",
                        &format!("{}px", cube.size.x * self.px_per_unit),
                    );
                    let _ = style.set_property(
                        "height",
                        &format!("{}px", cube.size.y * self.px_per_unit),
                    );
                    let _ = style.set_property(
                        "transform",
                        &format!(
                            "translateX({}px) rotateY({}rad)",
                            cube.position.x * self.px_per_unit,
                            cube.rotation_y
                        ),
                    );
                    let _ = style.set_property("background-color", &format!("#{:06x}", cube.color));
                }
            }

            // Player position along the track
            if let Some(el) = style_of(document, "player") {
                let x = self.state.player.position_x * self.px_per_unit;
                let _ = el
                    .style()
                    .set_property("transform", &format!("translateX({}px)", x));
            }

            // Countdown bar shrink
            if let Some(el) = style_of(document, "countdown-bar") {
                let fraction = self
                    .state
                    .round_timer
                    .map(|t| t.fraction_remaining())
                    .unwrap_or(1.0);
                let _ = el
                    .style()
                    .set_property("width", &format!("{}%", fraction * 100.0));
            }

            // Start-sequence prompt (held through the go signal)
            if let Some(el) = document.get_element_by_id("stage-text") {
                el.set_text_content(ui::start_prompt(&self.state));
            }

            // FPS counter
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("hud-fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    fn style_of(document: &Document, id: &str) -> Option<HtmlElement> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Statue Run starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        game.borrow_mut().set_viewport_width(width as f32);

        log::info!("Game initialized with seed: {}", seed);

        // Kick off the async model fetch; the game does not wait for it
        wasm_bindgen_futures::spawn_local(load_doll_model(game.clone()));

        setup_input_handlers(game.clone());
        setup_resize_handler(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Statue Run running!");
    }

    /// Fetch the doll model and forward the load lifecycle into the sim
    async fn load_doll_model(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let result = JsFuture::from(window.fetch_with_str(MODEL_URL)).await;

        let event = match result {
            Ok(value) => match value.dyn_into::<web_sys::Response>() {
                Ok(response) if response.ok() => {
                    // Fetch gives no byte-level progress; report the single
                    // step we can observe before handing off
                    apply_asset_event(&mut game.borrow_mut().state.doll, AssetEvent::Progress(1.0));
                    AssetEvent::Loaded
                }
                Ok(response) => AssetEvent::Error(format!("HTTP {}", response.status())),
                Err(_) => AssetEvent::Error("unexpected fetch result".into()),
            },
            Err(_) => AssetEvent::Error("fetch failed".into()),
        };

        apply_asset_event(&mut game.borrow_mut().state.doll, event);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // ArrowUp keydown -> run edge (ignoring OS key repeat)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == "ArrowUp" && !event.repeat() {
                    game.borrow_mut().input.run_down = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // ArrowUp keyup -> stop edge
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == "ArrowUp" {
                    game.borrow_mut().input.run_up = true;
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(800.0);
                game.borrow_mut().set_viewport_width(width as f32);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
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

            g.update(dt, time);

            let document = web_sys::window()
                .and_then(|w| w.document())
                .expect("no document");
            g.update_scene(&document);
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
    use statue_run::consts::*;
    use statue_run::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Statue Run (native) starting...");
    log::info!("Native mode is a headless smoke run - use the web build to play");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    log::info!("Seed: {}", seed);

    // Scripted round: wait through the start sequence, then run in short
    // bursts for a couple of simulated seconds
    let total_secs = 6.0;
    let steps = (total_secs / SIM_DT) as u64;
    let mut last_phase = state.phase;
    let mut last_facing = None;

    for step in 0..steps {
        let t = step as f32 * SIM_DT;
        let input = TickInput {
            // Tap the key once a second for a quarter second
            run_down: state.phase == GamePhase::Running && (t % 1.0).abs() < SIM_DT / 2.0,
            run_up: state.phase == GamePhase::Running && ((t + 0.75) % 1.0).abs() < SIM_DT / 2.0,
        };
        tick(&mut state, &input, SIM_DT);

        if state.phase != last_phase {
            log::info!("[{:.2}s] phase -> {:?}", t, state.phase);
            last_phase = state.phase;
        }
        let facing = state.doll.current_facing();
        if facing != last_facing {
            if let Some(f) = facing {
                log::info!("[{:.2}s] doll now facing {:?}", t, f);
            }
            last_facing = facing;
        }
    }

    log::info!(
        "Smoke run done: player at x={:.2} (started at {:.2}), doll cycles={}",
        state.player.position_x,
        START_POSITION,
        state.doll.cycle
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
