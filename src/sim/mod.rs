//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Randomness only through an injected `Rng`
//! - No rendering or platform dependencies

pub mod collision;
pub mod control;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    ball_rect_overlap, exits_left, exits_right, hits_bottom_wall, hits_top_wall,
};
pub use control::{Autopilot, follow_pointer, track_ball};
pub use rect::Rect;
pub use state::{Ball, MatchEvent, MatchPhase, MatchState, Paddle, Score, Side, spin_velocity};
pub use tick::tick;
