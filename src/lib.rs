//! Paddle Duel - Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, controllers, scoring)
//! - `renderer`: Display list generation and the browser canvas painter
//! - `session`: A seeded match plus its random source, driven by a front-end

pub mod renderer;
pub mod session;
pub mod sim;

pub use session::{MatchSummary, Session, play_headless};

use glam::Vec2;

/// Game configuration constants
///
/// The rules are fixed; every length is in field units (canvas pixels) and
/// every speed is per frame.
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its goal line
    pub const PADDLE_MARGIN: f32 = 25.0;
    /// AI paddle step per frame
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Half-width of the band around the AI paddle center where it holds still
    pub const AI_DEAD_ZONE: f32 = 18.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Horizontal serve speed, and the cap on vertical speed
    pub const BALL_SPEED: f32 = 6.0;

    /// First side to reach this many points wins
    pub const WINNING_SCORE: u32 = 7;
}

/// Center of the play field
#[inline]
pub fn field_center() -> Vec2 {
    Vec2::new(consts::FIELD_WIDTH / 2.0, consts::FIELD_HEIGHT / 2.0)
}
