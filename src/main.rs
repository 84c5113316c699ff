//! Paddle Court entry point
//!
//! Browser: builds the canvas, wires the keyboard and runs the 10 ms loop.
//! Native: plays a headless autopilot match and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

    use paddle_court::consts::*;
    use paddle_court::platform::elapsed_between;
    use paddle_court::platform::web::CanvasSurface;
    use paddle_court::{Game, Settings};

    /// Everything the loop and the key listeners share
    struct App {
        game: Game,
        surface: CanvasSurface,
        last_time: f64,
        interval_ms: i32,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Paddle Court starting...");

        let settings = Settings::load();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let (canvas, surface) =
            CanvasSurface::attach(&document, FIELD_WIDTH as u32, FIELD_HEIGHT as u32)
                .inspect_err(|e| log::error!("Could not set up canvas: {:?}", e))?;

        let seed = settings.seed_or(js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game: Game::with_settings(seed, &settings),
            surface,
            last_time: js_sys::Date::now(),
            interval_ms: settings.tick_interval_ms as i32,
        }));

        setup_input_handlers(&canvas, &window, app.clone());
        let _ = canvas.focus();

        schedule_tick(app);
        log::info!("Paddle Court running! Press space to serve.");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, window: &Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.on_dom_key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.on_dom_key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup never arrives, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().game.release_all();
                log::info!("Focus lost, keys released");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn schedule_tick(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, game loop stopped");
            return;
        };
        let interval = app.borrow().interval_ms;
        // Frees itself once the timer fires
        let callback = Closure::once_into_js(move || game_loop(app));
        if let Err(e) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), interval)
        {
            log::error!("Could not schedule tick: {:?}", e);
        }
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let app = &mut *guard;

            let now = js_sys::Date::now();
            let elapsed = elapsed_between(app.last_time, now);
            app.last_time = now;

            app.game.tick(elapsed, &mut app.surface);
            for event in app.game.drain_events() {
                log::debug!("{:?}", event);
            }
        }

        schedule_tick(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use serde::Serialize;

    use paddle_court::renderer::DrawList;
    use paddle_court::sim::{GameEvent, GamePhase};
    use paddle_court::{Game, Key, Settings};

    /// What a headless match produced
    #[derive(Debug, Serialize)]
    pub struct MatchSummary {
        pub seed: u64,
        pub ticks: u32,
        pub simulated_ms: f64,
        pub rounds: u32,
        pub player_score: u32,
        pub enemy_score: u32,
        pub paddle_hits: u32,
        pub wall_bounces: u32,
        pub last_frame_draw_calls: usize,
    }

    /// Play `settings.native_ticks` fixed steps with the AI on both paddles,
    /// serving again after every goal
    pub fn run_headless(settings: &Settings, seed: u64) -> MatchSummary {
        let mut game = Game::with_settings(seed, settings);
        game.set_autopilot(true);

        let elapsed = settings.tick_interval_ms as f32;
        let mut frame = DrawList::new();
        let mut paddle_hits = 0;
        let mut wall_bounces = 0;

        for _ in 0..settings.native_ticks {
            if game.state.phase == GamePhase::Stopped {
                game.on_key_down(Key::Space.code());
            } else {
                game.on_key_up(Key::Space.code());
            }

            frame.clear();
            game.tick(elapsed, &mut frame);

            for event in game.drain_events() {
                match event {
                    GameEvent::PaddleHit { .. } => paddle_hits += 1,
                    GameEvent::WallBounce => wall_bounces += 1,
                    GameEvent::Goal { .. } | GameEvent::RoundStarted { .. } => {
                        log::debug!("{:?}", event)
                    }
                }
            }
        }

        let state = &game.state;
        MatchSummary {
            seed,
            ticks: settings.native_ticks,
            simulated_ms: state.time_ms,
            rounds: state.round,
            player_score: state.player.score,
            enemy_score: state.enemy.score,
            paddle_hits,
            wall_bounces,
            last_frame_draw_calls: frame.len(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_court::Settings;
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Paddle Court (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let seed = settings.seed_or(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let summary = native::run_headless(&settings, seed);
    log::info!(
        "Match over: {} - {} after {} rounds",
        summary.player_score,
        summary.enemy_score,
        summary.rounds
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
