//! Match state and core simulation types
//!
//! Everything the front-end reads each frame lives here. The match owns its
//! paddles, ball and score; the random source stays with the caller.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{ball_rect_overlap, hits_bottom_wall, hits_top_wall};
use super::control::follow_pointer;
use super::rect::Rect;
use crate::consts::*;
use crate::field_center;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the pointer
    Player,
    /// Right paddle, driven by the tracking heuristic
    Ai,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Active gameplay
    Playing,
    /// Someone reached the winning score (terminal)
    GameOver { winner: Side },
}

impl MatchPhase {
    pub fn is_over(&self) -> bool {
        matches!(self, MatchPhase::GameOver { .. })
    }
}

/// Something that happened during a tick, reported to the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball reflected off a paddle
    PaddleHit { side: Side },
    /// Ball crossed a goal line; `scorer` gets the point
    Goal { scorer: Side },
    /// Emitted once, on the tick that ends the match
    GameOver { winner: Side },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// A ball at the field center with a random serve
    pub fn serve<R: Rng>(rng: &mut R) -> Self {
        let mut ball = Self {
            pos: field_center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };
        ball.reset(rng);
        ball
    }

    /// Recenter and pick a fresh serve
    ///
    /// Horizontal direction is a coin flip at full speed; vertical speed is
    /// uniform over the whole `[-BALL_SPEED, BALL_SPEED)` range.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = field_center();
        self.vel = Vec2::new(
            BALL_SPEED * dir,
            BALL_SPEED * rng.random_range(-1.0f32..1.0),
        );
    }

    /// Integrate one frame of motion
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Reflect off the top and bottom walls
    ///
    /// Returns true if a wall was touched this frame.
    pub fn bounce_walls(&mut self, field_height: f32) -> bool {
        let mut bounced = false;
        if hits_top_wall(self.pos, self.radius) {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        if hits_bottom_wall(self.pos, self.radius, field_height) {
            self.pos.y = field_height - self.radius;
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        bounced
    }

    /// Reflect off a paddle with spin, if overlapping it
    ///
    /// The ball is pushed just outside the paddle's front face so the same
    /// contact cannot fire again next frame.
    pub fn bounce_off(&mut self, paddle: &Paddle) -> bool {
        if !ball_rect_overlap(self.pos, self.radius, &paddle.rect()) {
            return false;
        }

        self.pos.x = match paddle.side {
            Side::Player => paddle.x + paddle.width + self.radius,
            Side::Ai => paddle.x - self.radius,
        };
        self.vel.x = -self.vel.x;
        self.vel.y = spin_velocity(self.pos.y, paddle);
        true
    }
}

/// Vertical ball speed after striking `paddle` at height `ball_y`
///
/// Linear in the offset from the paddle center: dead center gives zero,
/// the paddle ends give `±BALL_SPEED`. Offsets past the ends (the bounding
/// square reaches a radius beyond them) are held at the end value.
pub fn spin_velocity(ball_y: f32, paddle: &Paddle) -> f32 {
    BALL_SPEED * paddle.impact_offset(ball_y).clamp(-1.0, 1.0)
}

/// A paddle; `y` is the top edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// A paddle vertically centered on its side of the field
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Player => PADDLE_MARGIN,
            Side::Ai => FIELD_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            side,
            x,
            y: (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Bounding box for collision and drawing
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Largest legal `y`
    #[inline]
    pub fn max_y(&self) -> f32 {
        FIELD_HEIGHT - self.height
    }

    /// Move the top edge to `y`, clamped inside the field
    pub fn set_y(&mut self, y: f32) {
        self.y = y.clamp(0.0, self.max_y());
    }

    /// Offset of `ball_y` from the paddle center in half-heights
    /// (-1 at the top edge, +1 at the bottom edge)
    pub fn impact_offset(&self, ball_y: f32) -> f32 {
        (ball_y - self.center_y()) / (self.height / 2.0)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    /// Add one point for `side` and return its new total
    pub fn increment(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        };
        *slot += 1;
        *slot
    }

    /// Side with strictly more points
    pub fn leader(&self) -> Option<Side> {
        match self.player.cmp(&self.ai) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Ai),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Pointer-driven paddle (left)
    pub player: Paddle,
    /// Heuristic paddle (right)
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
    /// Frames simulated while playing
    pub frames: u64,
}

impl MatchState {
    /// Start a match with a random serve drawn from `rng`
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            player: Paddle::new(Side::Player),
            ai: Paddle::new(Side::Ai),
            ball: Ball::serve(rng),
            score: Score::default(),
            phase: MatchPhase::Playing,
            frames: 0,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::GameOver { winner } => Some(winner),
            MatchPhase::Playing => None,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    /// Pointer moved to `pointer_y` in field coordinates
    ///
    /// Ignored once the match is over, and for non-finite coordinates.
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        if self.is_over() || !pointer_y.is_finite() {
            return;
        }
        follow_pointer(&mut self.player, pointer_y);
    }

    /// The only `Playing -> GameOver` transition
    ///
    /// Call after every score change. Returns the winner on the call that
    /// ends the match, `None` otherwise (including when already over).
    pub fn check_game_over(&mut self) -> Option<Side> {
        if self.is_over() {
            return None;
        }
        let reached = self.score.player >= WINNING_SCORE || self.score.ai >= WINNING_SCORE;
        if !reached {
            return None;
        }

        // Only one side scores per frame, so the leader is the side that
        // just reached the threshold
        let winner = self.score.leader().unwrap_or(Side::Ai);
        self.phase = MatchPhase::GameOver { winner };
        log::info!(
            "Game over: {} wins {}-{}",
            winner.as_str(),
            self.score.player,
            self.score.ai
        );
        Some(winner)
    }
}
