//! Display list generation for 2D primitives
//!
//! Turns a `MatchState` into painter-ordered draw commands. Pure, so it can
//! be tested without a canvas.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{MatchState, Rect, Side};

pub const NET_COLOR: &str = "#888";
pub const PLAYER_COLOR: &str = "#0f8";
pub const AI_COLOR: &str = "#f44";
pub const FOREGROUND: &str = "#fff";

/// Net dash geometry
const NET_DASH_WIDTH: f32 = 4.0;
const NET_DASH_HEIGHT: f32 = 20.0;
const NET_DASH_START: f32 = 10.0;
const NET_DASH_SPACING: f32 = 30.0;

/// Score text size and baseline
pub const SCORE_FONT_SIZE: f32 = 44.0;
const SCORE_BASELINE: f32 = 60.0;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCmd {
    /// Wipe the whole surface
    Clear { width: f32, height: f32 },
    /// Filled rectangle
    Rect { rect: Rect, color: &'static str },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    /// Horizontally centered text; `pos` is the baseline center
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: &'static str,
    },
}

/// Dashes of the center net, top to bottom
pub fn net_dashes() -> Vec<Rect> {
    let x = FIELD_WIDTH / 2.0 - NET_DASH_WIDTH / 2.0;
    let mut dashes = Vec::new();
    let mut y = NET_DASH_START;
    while y < FIELD_HEIGHT {
        dashes.push(Rect::new(x, y, NET_DASH_WIDTH, NET_DASH_HEIGHT));
        y += NET_DASH_SPACING;
    }
    dashes
}

pub fn paddle_color(side: Side) -> &'static str {
    match side {
        Side::Player => PLAYER_COLOR,
        Side::Ai => AI_COLOR,
    }
}

/// Build the frame for `state`
///
/// Order: clear, net, Player paddle, AI paddle, ball, scores.
pub fn draw_list(state: &MatchState) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Clear {
        width: FIELD_WIDTH,
        height: FIELD_HEIGHT,
    }];

    cmds.extend(net_dashes().into_iter().map(|rect| DrawCmd::Rect {
        rect,
        color: NET_COLOR,
    }));

    for side in [Side::Player, Side::Ai] {
        cmds.push(DrawCmd::Rect {
            rect: state.paddle(side).rect(),
            color: paddle_color(side),
        });
    }

    cmds.push(DrawCmd::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: FOREGROUND,
    });

    for (score, x) in [
        (state.score.player, FIELD_WIDTH / 4.0),
        (state.score.ai, FIELD_WIDTH * 3.0 / 4.0),
    ] {
        cmds.push(DrawCmd::Text {
            text: score.to_string(),
            pos: Vec2::new(x, SCORE_BASELINE),
            size: SCORE_FONT_SIZE,
            color: FOREGROUND,
        });
    }

    cmds
}

/// Text shown when the match ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverMessage {
    pub icon: &'static str,
    pub headline: &'static str,
    pub hint: &'static str,
}

pub fn game_over_message(winner: Side) -> GameOverMessage {
    match winner {
        Side::Player => GameOverMessage {
            icon: "🎉",
            headline: "Game Over! You Win!",
            hint: "Refresh to play again.",
        },
        Side::Ai => GameOverMessage {
            icon: "😢",
            headline: "Game Over! AI Wins!",
            hint: "Refresh to try again.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Score;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> MatchState {
        let mut rng = Pcg32::seed_from_u64(10);
        MatchState::new(&mut rng)
    }

    #[test]
    fn test_net_dashes() {
        let dashes = net_dashes();
        // y = 10, 40, ..., 490
        assert_eq!(dashes.len(), 17);
        assert_eq!(dashes[0], Rect::new(398.0, 10.0, 4.0, 20.0));
        assert_eq!(dashes[16].y, 490.0);
    }

    #[test]
    fn test_draw_list_order() {
        let state = state();
        let cmds = draw_list(&state);

        assert!(matches!(cmds[0], DrawCmd::Clear { .. }));
        let paddles: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect { rect, color } if *color != NET_COLOR => Some((*rect, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            paddles,
            vec![
                (state.player.rect(), PLAYER_COLOR),
                (state.ai.rect(), AI_COLOR)
            ]
        );

        let circle_idx = cmds
            .iter()
            .position(|c| matches!(c, DrawCmd::Circle { .. }))
            .unwrap();
        assert_eq!(circle_idx, cmds.len() - 3);
    }

    #[test]
    fn test_scores_are_drawn() {
        let mut state = state();
        state.score = Score { player: 3, ai: 5 };
        let texts: Vec<_> = draw_list(&state)
            .into_iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, pos, .. } => Some((text, pos)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                ("3".to_string(), Vec2::new(200.0, 60.0)),
                ("5".to_string(), Vec2::new(600.0, 60.0)),
            ]
        );
    }

    #[test]
    fn test_game_over_message() {
        assert_eq!(game_over_message(Side::Player).headline, "Game Over! You Win!");
        assert_eq!(game_over_message(Side::Ai).headline, "Game Over! AI Wins!");
    }
}
