//! Player kinematics
//!
//! One-dimensional: the runner moves along x from the start marker toward
//! the end marker (decreasing x). Velocity is set by input edges and only
//! ever decays, never reverses.

use serde::{Deserialize, Serialize};

use super::tween::Tween;
use crate::consts::*;

/// The player's runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Position along the track; only ever decreases during a round
    pub position_x: f32,
    /// Current speed, always in [0, RUN_SPEED]
    pub velocity: f32,
    /// Active stop decay, if any
    decay: Option<Tween>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position_x: START_POSITION,
            velocity: 0.0,
            decay: None,
        }
    }

    /// Start running at full speed. Absolute, not additive: calling this
    /// again while already running changes nothing.
    pub fn run(&mut self) {
        self.decay = None;
        self.velocity = RUN_SPEED;
    }

    /// Ease velocity down to zero over the stop decay window
    pub fn stop(&mut self) {
        if self.velocity > 0.0 {
            self.decay = Some(Tween::new(self.velocity, 0.0, STOP_DECAY_SECS));
        }
    }

    /// Cut velocity immediately (round end)
    pub fn halt(&mut self) {
        self.decay = None;
        self.velocity = 0.0;
    }

    /// Apply one frame step
    pub fn update(&mut self, dt: f32) {
        if let Some(ref mut decay) = self.decay {
            self.velocity = decay.advance(dt).max(0.0);
            if decay.finished() {
                self.decay = None;
                self.velocity = 0.0;
            }
        }
        self.position_x -= self.velocity * dt;
    }

    /// Win/loss detection extension point. The rule never made it into any
    /// version of the original, so this deliberately decides nothing.
    // TODO: pick the rule - reaching END_POSITION, or moving while the doll
    // faces forward - and wire the result into GameState::finish.
    pub fn check_victory(&self) -> Option<super::state::Outcome> {
        None
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_run_sets_full_speed() {
        let mut player = Player::new();
        player.run();
        assert_eq!(player.velocity, RUN_SPEED);
    }

    #[test]
    fn test_run_is_idempotent() {
        let mut player = Player::new();
        player.run();
        player.update(SIM_DT);
        player.run();
        assert_eq!(player.velocity, RUN_SPEED);
    }

    #[test]
    fn test_stop_decays_to_zero() {
        let mut player = Player::new();
        player.run();
        player.stop();

        let steps = (STOP_DECAY_SECS / SIM_DT).ceil() as usize + 2;
        for _ in 0..steps {
            player.update(SIM_DT);
        }
        assert!(player.velocity.abs() < 1e-4);
    }

    #[test]
    fn test_stop_while_standing_is_a_no_op() {
        let mut player = Player::new();
        player.stop();
        player.update(SIM_DT);
        assert_eq!(player.velocity, 0.0);
        assert_eq!(player.position_x, START_POSITION);
    }

    #[test]
    fn test_position_advances_toward_end() {
        let mut player = Player::new();
        player.run();
        for _ in 0..120 {
            player.update(SIM_DT);
        }
        // One second at full speed
        assert!((player.position_x - (START_POSITION - RUN_SPEED)).abs() < 1e-3);
    }

    #[test]
    fn test_check_victory_is_undecided() {
        let mut player = Player::new();
        player.position_x = END_POSITION - 1.0;
        assert!(player.check_victory().is_none());
    }

    proptest! {
        /// For any sequence of run/stop calls, velocity stays in
        /// [0, RUN_SPEED] and position never increases.
        #[test]
        fn prop_velocity_bounded_and_position_monotonic(
            actions in proptest::collection::vec(0u8..3, 1..200)
        ) {
            let mut player = Player::new();
            let mut prev_x = player.position_x;
            for action in actions {
                match action {
                    0 => player.run(),
                    1 => player.stop(),
                    _ => {}
                }
                player.update(SIM_DT);
                prop_assert!(player.velocity >= 0.0);
                prop_assert!(player.velocity <= RUN_SPEED + 1e-4);
                prop_assert!(player.position_x <= prev_x + 1e-6);
                prev_x = player.position_x;
            }
        }
    }
}
