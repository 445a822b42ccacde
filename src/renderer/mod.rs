//! Rendering module
//!
//! `shapes` builds a display list from the match; `canvas` paints it in the
//! browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

pub use shapes::{DrawCmd, GameOverMessage, draw_list, game_over_message};
