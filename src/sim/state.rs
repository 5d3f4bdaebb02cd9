//! Game state and core simulation types
//!
//! The whole round lives in one `GameState` context struct owned by the
//! front-end and passed to `tick` - there is no global mutable state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::doll::Doll;
use super::player::Player;
use super::sequence::{RoundTimer, StartSequence};
use super::track::Track;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Asset fetch and startup sequence in progress
    Loading,
    /// Active gameplay: the doll cycles and the player may move
    Running,
    /// Round ended
    Finished,
}

/// How a round ended.
///
/// The type exists so `finish` has something to carry, but no rule in
/// `tick` produces one: the win/loss rule is missing game logic carried
/// over from every version of the original (see `Player::check_victory`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    ReachedEnd,
    Caught,
    TimeUp,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Derive an independent stream for one doll cycle. Dwell draws are
    /// independent per cycle but reproducible for a given run seed.
    pub fn cycle_rng(&self, cycle: u64) -> Pcg32 {
        let stream = cycle.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Pcg32::seed_from_u64(self.seed ^ stream)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Startup sequence (None once consumed)
    pub start_sequence: Option<StartSequence>,
    /// Countdown-bar timer, armed when the round starts
    pub round_timer: Option<RoundTimer>,
    /// Outcome, set by `finish`
    pub outcome: Option<Outcome>,
    /// The doll NPC
    pub doll: Doll,
    /// The player's runner
    pub player: Player,
    /// Static track geometry
    pub track: Track,
}

impl GameState {
    /// Create a new round with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::Loading,
            time_ticks: 0,
            start_sequence: Some(StartSequence::new()),
            round_timer: None,
            outcome: None,
            doll: Doll::new(),
            player: Player::new(),
            track: Track::new(),
        }
    }

    /// End the round: cancel the doll's look cycle and freeze the player.
    ///
    /// Nothing inside `tick` calls this - the victory rule is undefined -
    /// but the machinery is here so a future rule (or the front-end) can
    /// stop the loop cleanly instead of letting it reschedule forever.
    pub fn finish(&mut self, outcome: Outcome) {
        if self.phase == GamePhase::Finished {
            return;
        }
        log::info!("Round finished: {:?}", outcome);
        self.doll.stop();
        self.player.halt();
        self.outcome = Some(outcome);
        self.phase = GamePhase::Finished;
    }

    /// Seconds of simulated time elapsed
    pub fn time_secs(&self) -> f32 {
        self.time_ticks as f32 * crate::consts::SIM_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_loading() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Loading);
        assert!(state.start_sequence.is_some());
        assert!(state.round_timer.is_none());
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_finish_is_terminal_and_sticky() {
        let mut state = GameState::new(42);
        state.finish(Outcome::TimeUp);
        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.outcome, Some(Outcome::TimeUp));

        // A second finish must not overwrite the recorded outcome
        state.finish(Outcome::Caught);
        assert_eq!(state.outcome, Some(Outcome::TimeUp));
    }

    #[test]
    fn test_cycle_rng_streams_differ() {
        let rng_state = RngState::new(7);
        use rand::Rng;
        let a: u64 = rng_state.cycle_rng(0).random();
        let b: u64 = rng_state.cycle_rng(1).random();
        assert_ne!(a, b);
    }
}
