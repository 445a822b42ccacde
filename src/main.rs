//! Paddle Duel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

    use paddle_duel::Session;
    use paddle_duel::renderer::{self, canvas};
    use paddle_duel::sim::{MatchEvent, Side};

    /// Game instance holding all state
    struct Game {
        session: Session,
        ctx: CanvasRenderingContext2d,
        document: Document,
    }

    impl Game {
        /// Simulate one frame and draw it
        ///
        /// Returns true while the loop should keep running.
        fn frame(&mut self) -> Result<bool, JsValue> {
            for event in self.session.step() {
                if let MatchEvent::GameOver { winner } = event {
                    self.show_game_over(winner)?;
                }
            }
            canvas::paint(&self.ctx, &renderer::draw_list(&self.session.state))?;
            Ok(!self.session.is_over())
        }

        fn show_game_over(&self, winner: Side) -> Result<(), JsValue> {
            let Some(el) = self.document.get_element_by_id("game-over") else {
                log::warn!("No #game-over element; {} wins", winner.as_str());
                return Ok(());
            };
            let msg = renderer::game_over_message(winner);
            el.set_inner_html(&format!(
                "{icon} <b>{}</b> {icon}<br><span style=\"font-size:1.2rem;\">{}</span>",
                msg.headline,
                msg.hint,
                icon = msg.icon
            ));
            el.set_attribute("style", "display: block")?;
            Ok(())
        }
    }

    pub fn run() -> Result<(), JsValue> {
        log::info!("Paddle Duel starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or("no #pong canvas")?
            .dyn_into()?;
        // Field units map 1:1 onto the canvas backing store
        canvas.set_width(paddle_duel::consts::FIELD_WIDTH as u32);
        canvas.set_height(paddle_duel::consts::FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed),
            ctx,
            document,
        }));
        log::info!("Match initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move: translate client coordinates into field space
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let mut y = event.client_y() as f64 - rect.top();
            // CSS size may differ from the backing store
            if rect.height() > 0.0 {
                y *= canvas_clone.height() as f64 / rect.height();
            }
            game.borrow_mut().session.pointer_moved(y as f32);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_running = game.borrow_mut().frame();
        match keep_running {
            Ok(true) => request_animation_frame(game),
            Ok(false) => log::info!("Match finished, frame loop stopped"),
            Err(e) => log::error!("Frame failed: {:?}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

/// Safety net for a match neither side can finish (ten minutes at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let seed = std::env::var("PADDLE_DUEL_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(clock_seed);
    log::info!("Paddle Duel (native, headless) starting with seed {}", seed);

    let summary = paddle_duel::play_headless(seed, MAX_FRAMES);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
