//! Per-frame simulation tick
//!
//! Order within a frame: AI controller, ball motion, wall bounces, paddle
//! bounces, goals and the win check. The Player paddle is moved by pointer
//! events between ticks, not here.

use rand::Rng;

use super::collision::{exits_left, exits_right};
use super::control::track_ball;
use super::state::{MatchEvent, MatchState, Side};
use crate::consts::*;

/// Advance the match by one frame
///
/// Returns what happened this frame. A finished match is left untouched and
/// yields no events, so the front-end may keep calling this after game over.
pub fn tick<R: Rng>(state: &mut MatchState, rng: &mut R) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    state.frames += 1;

    track_ball(&mut state.ai, state.ball.pos.y);

    state.ball.advance();
    if state.ball.bounce_walls(FIELD_HEIGHT) {
        events.push(MatchEvent::WallBounce);
    }

    if state.ball.bounce_off(&state.player) {
        events.push(MatchEvent::PaddleHit { side: Side::Player });
    }
    if state.ball.bounce_off(&state.ai) {
        events.push(MatchEvent::PaddleHit { side: Side::Ai });
    }

    let scorer = if exits_left(state.ball.pos, state.ball.radius) {
        Some(Side::Ai)
    } else if exits_right(state.ball.pos, state.ball.radius, FIELD_WIDTH) {
        Some(Side::Player)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        let points = state.score.increment(scorer);
        log::debug!(
            "{} scores ({} to {}'s {}) at frame {}",
            scorer.as_str(),
            points,
            scorer.opponent().as_str(),
            state.score.get(scorer.opponent()),
            state.frames
        );
        events.push(MatchEvent::Goal { scorer });

        state.ball.reset(rng);

        if let Some(winner) = state.check_game_over() {
            events.push(MatchEvent::GameOver { winner });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_center;
    use crate::sim::state::{MatchPhase, Score};
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_match(seed: u64) -> (MatchState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = MatchState::new(&mut rng);
        (state, rng)
    }

    /// Ball about to leave through the left goal, well clear of the paddle
    fn ball_exiting_left(state: &mut MatchState) {
        state.ball.pos = Vec2::new(12.0, 40.0);
        state.ball.vel = Vec2::new(-BALL_SPEED, 0.0);
    }

    fn ball_exiting_right(state: &mut MatchState) {
        state.ball.pos = Vec2::new(FIELD_WIDTH - 12.0, 460.0);
        state.ball.vel = Vec2::new(BALL_SPEED, 0.0);
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let (mut state, mut rng) = new_match(1);
        state.ball.pos = Vec2::new(400.0, 250.0);
        state.ball.vel = Vec2::new(6.0, -2.0);

        let events = tick(&mut state, &mut rng);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(406.0, 248.0));
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_wall_bounce_from_just_above_top() {
        let (mut state, mut rng) = new_match(2);
        state.ball.pos = Vec2::new(400.0, BALL_RADIUS + 1.0);
        state.ball.vel = Vec2::new(6.0, -3.0);

        let events = tick(&mut state, &mut rng);
        assert_eq!(events, vec![MatchEvent::WallBounce]);
        assert_eq!(state.ball.pos.y, BALL_RADIUS);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_wall_bounce_from_inside_top_margin() {
        // Leading edge already half a unit past the wall before the step
        let (mut state, mut rng) = new_match(12);
        state.ball.pos = Vec2::new(400.0, BALL_RADIUS - 0.5);
        state.ball.vel = Vec2::new(-6.0, -3.0);

        let events = tick(&mut state, &mut rng);
        assert_eq!(events, vec![MatchEvent::WallBounce]);
        assert_eq!(state.ball.pos.y, BALL_RADIUS);
        assert_eq!(state.ball.vel.y, 3.0);
    }

    #[test]
    fn test_player_return_reverses_ball() {
        let (mut state, mut rng) = new_match(3);
        state.ball.pos = Vec2::new(50.0, state.player.center_y());
        state.ball.vel = Vec2::new(-BALL_SPEED, 0.0);

        let events = tick(&mut state, &mut rng);
        assert_eq!(events, vec![MatchEvent::PaddleHit { side: Side::Player }]);
        assert_eq!(state.ball.pos.x, state.player.x + PADDLE_WIDTH + BALL_RADIUS);
        assert_eq!(state.ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut state, mut rng) = new_match(4);
        state.score = Score { player: 2, ai: 3 };
        ball_exiting_left(&mut state);

        let events = tick(&mut state, &mut rng);
        assert_eq!(events, vec![MatchEvent::Goal { scorer: Side::Ai }]);
        assert_eq!(state.score, Score { player: 2, ai: 4 });
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_ai_scores_when_ball_already_past_left_line() {
        let (mut state, mut rng) = new_match(13);
        state.score = Score { player: 1, ai: 2 };
        state.ball.pos = Vec2::new(BALL_RADIUS - 1.0, 40.0);
        state.ball.vel = Vec2::new(-BALL_SPEED, 1.0);

        let events = tick(&mut state, &mut rng);
        assert_eq!(events, vec![MatchEvent::Goal { scorer: Side::Ai }]);
        assert_eq!(state.score, Score { player: 1, ai: 3 });
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut state, mut rng) = new_match(5);
        ball_exiting_right(&mut state);

        let events = tick(&mut state, &mut rng);
        assert_eq!(events, vec![MatchEvent::Goal { scorer: Side::Player }]);
        assert_eq!(state.score, Score { player: 1, ai: 0 });
        assert_eq!(state.ball.pos, field_center());
    }

    #[test]
    fn test_winning_goal_ends_match() {
        let (mut state, mut rng) = new_match(6);
        state.score = Score {
            player: WINNING_SCORE - 1,
            ai: 5,
        };
        ball_exiting_right(&mut state);

        let events = tick(&mut state, &mut rng);
        assert_eq!(
            events,
            vec![
                MatchEvent::Goal { scorer: Side::Player },
                MatchEvent::GameOver { winner: Side::Player },
            ]
        );
        assert_eq!(state.score.player, WINNING_SCORE);
        assert_eq!(state.winner(), Some(Side::Player));
    }

    #[test]
    fn test_ai_can_win() {
        let (mut state, mut rng) = new_match(7);
        state.score = Score {
            player: 0,
            ai: WINNING_SCORE - 1,
        };
        ball_exiting_left(&mut state);

        let events = tick(&mut state, &mut rng);
        assert!(events.contains(&MatchEvent::GameOver { winner: Side::Ai }));
        assert_eq!(state.phase, MatchPhase::GameOver { winner: Side::Ai });
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let (mut state, mut rng) = new_match(8);
        state.score = Score {
            player: WINNING_SCORE - 1,
            ai: 0,
        };
        ball_exiting_right(&mut state);
        tick(&mut state, &mut rng);
        assert!(state.is_over());

        let frozen = state.clone();
        for _ in 0..10 {
            assert!(tick(&mut state, &mut rng).is_empty());
            state.pointer_moved(10.0);
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_ai_holds_when_ball_in_dead_zone() {
        let (mut state, mut rng) = new_match(9);
        state.ball.pos = Vec2::new(400.0, state.ai.center_y() + AI_DEAD_ZONE - 1.0);
        state.ball.vel = Vec2::new(6.0, 0.0);
        let y = state.ai.y;

        tick(&mut state, &mut rng);
        assert_eq!(state.ai.y, y);
    }

    #[test]
    fn test_determinism() {
        // Two matches with the same seed and inputs stay identical
        let (mut a, mut rng_a) = new_match(99999);
        let (mut b, mut rng_b) = new_match(99999);

        for frame in 0..5000 {
            let pointer = (frame as f32 * 3.7) % FIELD_HEIGHT;
            a.pointer_moved(pointer);
            b.pointer_moved(pointer);
            let ev_a = tick(&mut a, &mut rng_a);
            let ev_b = tick(&mut b, &mut rng_b);
            assert_eq!(ev_a, ev_b);
        }
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_field(seed in any::<u64>(), pointers in prop::collection::vec(-200.0f32..700.0, 1..300)) {
            let (mut state, mut rng) = new_match(seed);
            for pointer in pointers {
                state.pointer_moved(pointer);
                tick(&mut state, &mut rng);
                for paddle in [&state.player, &state.ai] {
                    prop_assert!(paddle.y >= 0.0);
                    prop_assert!(paddle.y <= FIELD_HEIGHT - PADDLE_HEIGHT);
                }
                prop_assert!(state.score.player <= WINNING_SCORE);
                prop_assert!(state.score.ai <= WINNING_SCORE);
            }
        }

        #[test]
        fn prop_spin_monotonic_and_bounded(a in 150.0f32..350.0, b in 150.0f32..350.0) {
            let paddle = crate::sim::Paddle::new(Side::Ai);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let v_lo = crate::sim::spin_velocity(lo, &paddle);
            let v_hi = crate::sim::spin_velocity(hi, &paddle);
            prop_assert!(v_lo <= v_hi);
            prop_assert!(v_lo.abs() <= BALL_SPEED && v_hi.abs() <= BALL_SPEED);
        }
    }
}
