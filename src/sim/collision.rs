//! Collision detection for the ball against paddles, walls and goal lines
//!
//! The paddle test treats the ball as its bounding square: the ball overlaps
//! a paddle when its center lies strictly inside the paddle rectangle grown
//! by the ball radius. Corner hits register slightly early, which the game
//! feel depends on.

use glam::Vec2;

use super::rect::Rect;

/// Check overlap between a ball and an axis-aligned rectangle
pub fn ball_rect_overlap(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> bool {
    rect.expand(ball_radius).contains(ball_pos)
}

/// Ball's top edge is above the top wall
#[inline]
pub fn hits_top_wall(ball_pos: Vec2, ball_radius: f32) -> bool {
    ball_pos.y - ball_radius < 0.0
}

/// Ball's bottom edge is below the bottom wall
#[inline]
pub fn hits_bottom_wall(ball_pos: Vec2, ball_radius: f32, field_height: f32) -> bool {
    ball_pos.y + ball_radius > field_height
}

/// Ball's leading edge crossed the left goal line
#[inline]
pub fn exits_left(ball_pos: Vec2, ball_radius: f32) -> bool {
    ball_pos.x - ball_radius < 0.0
}

/// Ball's leading edge crossed the right goal line
#[inline]
pub fn exits_right(ball_pos: Vec2, ball_radius: f32, field_width: f32) -> bool {
    ball_pos.x + ball_radius > field_width
}
