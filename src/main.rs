//! Starhopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use starhopper::Settings;
    use starhopper::input::KeyState;
    use starhopper::renderer::scene::DUST_COUNT;
    use starhopper::renderer::{Backdrop, CanvasPainter, Scene};
    use starhopper::sim::{FrameClock, GameEvent, GameState, LevelCatalog, advance_frame};
    use starhopper::ui::{self, HudView, Overlays};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        painter: CanvasPainter,
        clock: FrameClock,
        keys: KeyState,
        settings: Settings,
    }

    impl Game {
        /// Run one simulation step
        fn update(&mut self, time: f64) {
            let input = self.keys.take();
            advance_frame(&mut self.state, &mut self.clock, &input, time);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::PhaseChanged { from, to } => {
                        log::info!("Phase {:?} -> {:?}", from, to);
                        self.show_overlays();
                    }
                    GameEvent::LevelStarted { index } => {
                        log::debug!("Level {} started", index + 1);
                    }
                    GameEvent::WaypointConnected { .. } | GameEvent::LevelCompleted { .. } => {}
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Err(e) = self.painter.paint(&Scene::build(&self.state)) {
                log::warn!("Render error: {:?}", e);
            }
        }

        fn show_overlays(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Err(e) = ui::dom::apply_overlays(&document, Overlays::for_phase(self.state.phase)) {
                log::warn!("Overlay update failed: {:?}", e);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = HudView::from_state(&self.state, self.settings.low_time_warning);
            if let Err(e) = ui::dom::apply_hud(&document, &hud) {
                log::warn!("HUD update failed: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Starhopper starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| {
                log::error!("Canvas #gameCanvas not found");
                JsValue::from_str("no canvas")
            })?
            .dyn_into()?;

        let settings = Settings::load();
        let size = settings.tuning.field_size();
        canvas.set_width(size.x as u32);
        canvas.set_height(size.y as u32);

        let seed = js_sys::Date::now() as u64;
        let painter = CanvasPainter::new(&canvas, Backdrop::new(seed, size, DUST_COUNT)).inspect_err(|_| {
            log::error!("Canvas 2D context unavailable");
        })?;

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(LevelCatalog::zodiac(), settings.tuning),
            painter,
            clock: FrameClock::new(),
            keys: KeyState::new(settings.debug_skip),
            settings,
        }));
        game.borrow().show_overlays();

        setup_input_handlers(game.clone())?;
        request_animation_frame(game);

        log::info!("Starhopper running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys.press(&event.key(), event.shift_key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: key-ups will be lost, so let go of everything
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.release_all();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
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
    use starhopper::sim::{GameEvent, GamePhase, GameState, LevelCatalog, steer, start_game, tick};
    use starhopper::Settings;

    env_logger::init();
    log::info!("Starhopper (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let mut state = GameState::new(LevelCatalog::zodiac(), settings.tuning);
    start_game(&mut state);

    const DT: f32 = 1.0 / 60.0;
    let mut elapsed = 0.0;
    while state.phase == GamePhase::Playing {
        let input = steer(&state);
        tick(&mut state, &input, DT);
        elapsed += DT;

        for event in state.drain_events() {
            if let GameEvent::LevelCompleted { index } = event {
                let name = state.catalog.get(index).map(|l| l.name.as_str()).unwrap_or("?");
                println!("{:>2}. {:<12} cleared at {:6.2}s", index + 1, name, elapsed);
            }
        }
    }

    println!("Finished in {:?} after {} steps ({:.2}s)", state.phase, state.steps, elapsed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
