//! Paddle controllers
//!
//! The Player paddle follows the pointer; the AI paddle chases the ball at a
//! fixed speed with a dead zone, so it lags and can be beaten.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Ball, Paddle};
use crate::consts::{AI_DEAD_ZONE, FIELD_HEIGHT, PADDLE_SPEED};

/// Center `paddle` on the pointer's vertical coordinate
pub fn follow_pointer(paddle: &mut Paddle, pointer_y: f32) {
    paddle.set_y(pointer_y - paddle.height / 2.0);
}

/// One frame of the AI tracking policy
pub fn track_ball(paddle: &mut Paddle, ball_y: f32) {
    let center = paddle.center_y();
    if center < ball_y - AI_DEAD_ZONE {
        paddle.set_y(paddle.y + PADDLE_SPEED);
    } else if center > ball_y + AI_DEAD_ZONE {
        paddle.set_y(paddle.y - PADDLE_SPEED);
    }
}

/// Largest aiming mistake of the autopilot, in field units
///
/// Half a paddle plus the ball radius is 60, so a good share of returns miss.
pub const AUTOPILOT_MAX_ERROR: f32 = 110.0;

/// Scripted stand-in for a human pointer, used by the headless runner
///
/// Eases toward the ball while it approaches and drifts back to mid-field
/// while it travels away. Each time the ball turns toward it, the pilot draws
/// a fresh aiming error from its own seeded RNG, so a match always ends and
/// replays identically for the same seed.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Current pointer height
    pub pointer_y: f32,
    /// Fraction of the remaining distance covered each frame (0-1)
    pub gain: f32,
    /// Bound on the per-return aiming error
    pub max_error: f32,
    aim_error: f32,
    incoming: bool,
    rng: Pcg32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            pointer_y: FIELD_HEIGHT / 2.0,
            gain: 0.12,
            max_error: AUTOPILOT_MAX_ERROR,
            aim_error: 0.0,
            incoming: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Aiming error for the current (or last) incoming ball
    pub fn aim_error(&self) -> f32 {
        self.aim_error
    }

    /// Advance one frame and return the new pointer height
    pub fn next_pointer(&mut self, ball: &Ball) -> f32 {
        let incoming = ball.vel.x < 0.0;
        if incoming && !self.incoming {
            self.aim_error = self.rng.random_range(-self.max_error..=self.max_error);
        }
        self.incoming = incoming;

        let target = if incoming {
            ball.pos.y + self.aim_error
        } else {
            FIELD_HEIGHT / 2.0
        };
        self.pointer_y += (target - self.pointer_y) * self.gain;
        self.pointer_y
    }
}
