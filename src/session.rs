//! A running match together with its seeded random source
//!
//! Front-ends own one `Session` and call `pointer_moved` from input events
//! and `step` once per frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::{Autopilot, MatchEvent, MatchState, Side, tick};

/// One match plus the RNG that drives its serves
#[derive(Debug, Clone)]
pub struct Session {
    seed: u64,
    rng: Pcg32,
    pub state: MatchState,
}

impl Session {
    /// Start a match whose serves are reproducible from `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = MatchState::new(&mut rng);
        Self { seed, rng, state }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Forward a pointer move (field coordinates) to the Player paddle
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        self.state.pointer_moved(pointer_y);
    }

    /// Simulate one frame
    pub fn step(&mut self) -> Vec<MatchEvent> {
        tick(&mut self.state, &mut self.rng)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            seed: self.seed,
            frames: self.state.frames,
            player_score: self.state.score.player,
            ai_score: self.state.score.ai,
            winner: self.state.winner(),
        }
    }
}

/// Final result of a match, as reported by the headless runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub seed: u64,
    pub frames: u64,
    pub player_score: u32,
    pub ai_score: u32,
    /// `None` if the frame cap was hit first
    pub winner: Option<Side>,
}

/// Mixed into the match seed so the autopilot's aim does not mirror the serves
const PILOT_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Play a whole match with the autopilot holding the pointer
///
/// Stops at game over or after `max_frames` frames.
pub fn play_headless(seed: u64, max_frames: u64) -> MatchSummary {
    let mut session = Session::new(seed);
    let mut pilot = Autopilot::new(seed ^ PILOT_SEED_SALT);

    while !session.is_over() && session.state.frames < max_frames {
        let pointer = pilot.next_pointer(&session.state.ball);
        session.pointer_moved(pointer);
        for event in session.step() {
            match event {
                MatchEvent::Goal { scorer } => log::info!(
                    "Goal for {}: {} points",
                    scorer.as_str(),
                    session.state.score.get(scorer)
                ),
                MatchEvent::GameOver { winner } => {
                    log::info!("{} wins after {} frames", winner.as_str(), session.state.frames)
                }
                MatchEvent::WallBounce | MatchEvent::PaddleHit { .. } => {}
            }
        }
    }

    if !session.is_over() {
        log::warn!("Frame cap of {} reached before a winner", max_frames);
    }
    session.summary()
}
