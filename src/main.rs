//! Kickboard entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement, MouseEvent, TouchEvent,
    };

    use kickboard::consts::*;
    use kickboard::platform::Clock;
    use kickboard::platform::time::PerformanceClock;
    use kickboard::renderer::{CanvasSurface, draw_frame};
    use kickboard::sim::{GameEvent, GameState, TickInput, tick};
    use kickboard::Settings;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        text_box: Option<HtmlInputElement>,
        rng: Pcg32,
        clock: PerformanceClock,
        input: TickInput,
    }

    impl Game {
        /// Run one simulation tick and mirror typed text into the page
        fn update(&mut self) {
            self.input.now_ms = self.clock.now_ms();
            let events = tick(&mut self.state, &self.input, &mut self.rng);
            self.input.pointer = None;

            let mut text_changed = false;
            for event in &events {
                match event {
                    GameEvent::KeyTyped(_) => text_changed = true,
                    GameEvent::ComboScored { points, .. } if *points > 1 => {
                        log::info!("Combo x{} (score {})", points, self.state.score);
                    }
                    _ => {}
                }
            }

            if text_changed {
                if let Some(el) = &self.text_box {
                    el.set_value(self.state.text.as_str());
                }
            }
        }

        fn render(&mut self) {
            draw_frame(&mut self.surface, &self.state, &self.settings);
        }

        /// Fit the canvas to the window and tell the simulation
        fn fit_to_window(&mut self) {
            let (w, h) = window_arena_size();
            self.canvas.set_width(w as u32);
            self.canvas.set_height(h as u32);
            self.state.resize(w, h);
        }
    }

    /// Arena size for the current window: capped width, room left for the text box
    fn window_arena_size() -> (f32, f32) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return (ARENA_WIDTH, ARENA_HEIGHT),
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(ARENA_WIDTH as f64) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(ARENA_HEIGHT as f64) as f32;
        (width.min(ARENA_WIDTH), height - TEXT_BOX_MARGIN)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Kickboard starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;
        let text_box = document
            .get_element_by_id("typed-text")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        let (width, height) = window_arena_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = GameState::new(width, height, settings.physics.clone(), 0.0);
        state.ball.respawn(state.center(), &mut rng, &settings.physics);

        log::info!("Arena {}x{}, seed {}", width, height, seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            settings,
            surface: CanvasSurface::new(ctx),
            canvas: canvas.clone(),
            text_box,
            rng,
            clock: PerformanceClock,
            input: TickInput::default(),
        }));

        setup_input_handlers(&canvas, game.clone())?;
        setup_text_box(game.clone())?;
        setup_resize(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Kickboard running!");
        Ok(())
    }

    /// Pointer position relative to the canvas
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                let p = canvas_point(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut().input.pointer = Some(p);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start and move both just move the shoe
        for name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let p = canvas_point(&canvas_clone, touch.client_x(), touch.client_y());
                    game.borrow_mut().input.pointer = Some(p);
                }
            });
            canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Hand edits in the text box replace the typed text
    fn setup_text_box(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let el = match game.borrow().text_box.clone() {
            Some(el) => el,
            None => {
                log::warn!("No #typed-text element, typed text is not shown");
                return Ok(());
            }
        };

        let el_clone = el.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().state.text.set(el_clone.value());
        });
        el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().fit_to_window();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Kickboard (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a scripted session: the shoe follows the ball and kicks it each time
/// it drops below the middle of the arena.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use glam::Vec2;
    use kickboard::Settings;
    use kickboard::consts::{ARENA_HEIGHT, ARENA_WIDTH};
    use kickboard::platform::Clock;
    use kickboard::platform::time::SystemClock;
    use kickboard::sim::{GameEvent, GameState, TickInput, tick};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FRAMES: u32 = 60 * 30;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    let settings = Settings::load();
    let mut rng = Pcg32::seed_from_u64(0x6b69_636b);
    let mut state = GameState::new(ARENA_WIDTH, ARENA_HEIGHT, settings.physics.clone(), 0.0);
    state.ball.respawn(state.center(), &mut rng, &settings.physics);

    let clock = SystemClock::new();
    let start = clock.now_ms();
    let mut landings = 0;

    for frame in 0..FRAMES {
        // Hover under the ball once it falls past the middle
        let ball = state.ball.pos();
        let pointer = if ball.y > ARENA_HEIGHT * 0.6 && state.ball.body.vel.y > 0.0 {
            Some(ball + Vec2::new(4.0, state.pointer.radius))
        } else {
            Some(Vec2::new(ball.x, ARENA_HEIGHT - state.pointer.radius))
        };

        let input = TickInput {
            now_ms: frame as f64 * FRAME_MS,
            pointer,
        };
        for event in tick(&mut state, &input, &mut rng) {
            match event {
                GameEvent::GroundContact => landings += 1,
                GameEvent::ComboScored { points, .. } => log::info!("Combo x{}", points),
                GameEvent::KeyTyped(action) => log::debug!("Typed {:?}", action),
                GameEvent::ShoeHit { .. } => {}
            }
        }
    }

    println!(
        "{} frames in {:.1} ms: score {}, best combo {}, landings {}, typed {:?}",
        FRAMES,
        clock.now_ms() - start,
        state.score,
        state.best_combo,
        landings,
        state.text.as_str()
    );
}
