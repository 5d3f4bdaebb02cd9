//! Fixed timestep simulation tick
//!
//! Core loop that advances one round deterministically.

use super::state::{GamePhase, GameState};

/// Input edges for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// ArrowUp went down this frame (key repeat filtered out)
    pub run_down: bool,
    /// ArrowUp went up this frame
    pub run_up: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Loading => {
            // Input is inert until the round starts
            if let Some(ref mut seq) = state.start_sequence {
                if let Some(stage) = seq.advance(dt) {
                    log::debug!("Start sequence stage {}", stage);
                }
                if seq.complete() {
                    state.start_sequence = None;
                    state.round_timer = Some(super::sequence::RoundTimer::new());
                    state.doll.start_cycle(&state.rng_state);
                    state.phase = GamePhase::Running;
                    log::info!("Round started");
                }
            }
        }

        GamePhase::Running => {
            if input.run_down {
                state.player.run();
            }
            if input.run_up {
                state.player.stop();
            }

            state.doll.update(dt, &state.rng_state);
            state.player.update(dt);

            if let Some(ref mut timer) = state.round_timer {
                timer.advance(dt);
            }
        }

        GamePhase::Finished => {}
    }

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::sequence::StartSequence;
    use crate::sim::state::Outcome;

    fn run_secs(state: &mut GameState, input: &TickInput, secs: f32) {
        let steps = (secs / SIM_DT).round() as usize;
        for _ in 0..steps {
            tick(state, input, SIM_DT);
        }
    }

    #[test]
    fn test_startup_flips_to_running_after_fixed_delay() {
        let mut state = GameState::new(1);
        let input = TickInput::default();

        // Just shy of the full sequence
        run_secs(&mut state, &input, StartSequence::total_secs() - 0.05);
        assert_eq!(state.phase, GamePhase::Loading);

        run_secs(&mut state, &input, 0.1);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.round_timer.is_some());
        // The doll's first cycle was kicked
        assert!(!matches!(state.doll.look, crate::sim::DollLook::Idle));
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let mut state = GameState::new(1);
        let input = TickInput {
            run_down: true,
            run_up: false,
        };
        run_secs(&mut state, &input, 1.0);
        assert_eq!(state.player.velocity, 0.0);
        assert_eq!(state.player.position_x, START_POSITION);
    }

    #[test]
    fn test_position_unchanged_without_input_once_running() {
        let mut state = GameState::new(1);
        let input = TickInput::default();
        run_secs(&mut state, &input, StartSequence::total_secs() + 1.0);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.position_x, START_POSITION);
    }

    #[test]
    fn test_tap_decays_velocity_to_zero() {
        let mut state = GameState::new(1);
        run_secs(&mut state, &TickInput::default(), StartSequence::total_secs() + 0.1);
        assert_eq!(state.phase, GamePhase::Running);

        // Key down, hold 100ms, key up
        tick(
            &mut state,
            &TickInput {
                run_down: true,
                run_up: false,
            },
            SIM_DT,
        );
        assert_eq!(state.player.velocity, RUN_SPEED);
        run_secs(&mut state, &TickInput::default(), 0.1);
        tick(
            &mut state,
            &TickInput {
                run_down: false,
                run_up: true,
            },
            SIM_DT,
        );

        // Let the decay run out
        run_secs(&mut state, &TickInput::default(), STOP_DECAY_SECS + 0.1);
        assert!(state.player.velocity.abs() < 1e-3);
        assert!(state.player.position_x < START_POSITION);
    }

    #[test]
    fn test_round_timer_counts_down_while_running() {
        let mut state = GameState::new(1);
        run_secs(&mut state, &TickInput::default(), StartSequence::total_secs() + 0.1);
        let before = state.round_timer.as_ref().map(|t| t.remaining_secs());
        run_secs(&mut state, &TickInput::default(), 1.0);
        let after = state.round_timer.as_ref().map(|t| t.remaining_secs());
        assert!(after < before);
    }

    #[test]
    fn test_finished_round_is_frozen() {
        let mut state = GameState::new(1);
        run_secs(&mut state, &TickInput::default(), StartSequence::total_secs() + 0.5);
        state.finish(Outcome::ReachedEnd);

        let rot = state.doll.rot_y;
        let pos = state.player.position_x;
        let input = TickInput {
            run_down: true,
            run_up: false,
        };
        run_secs(&mut state, &input, 2.0);

        assert_eq!(state.doll.rot_y, rot);
        assert_eq!(state.player.position_x, pos);
        assert_eq!(state.player.velocity, 0.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and inputs must stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput::default(),
            TickInput {
                run_down: true,
                run_up: false,
            },
            TickInput::default(),
            TickInput {
                run_down: false,
                run_up: true,
            },
        ];

        // Get past the start sequence first
        for _ in 0..((StartSequence::total_secs() / SIM_DT) as usize + 10) {
            tick(&mut state1, &TickInput::default(), SIM_DT);
            tick(&mut state2, &TickInput::default(), SIM_DT);
        }

        for input in &inputs {
            for _ in 0..30 {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.doll.cycle, state2.doll.cycle);
        assert!((state1.doll.rot_y - state2.doll.rot_y).abs() < 1e-6);
        assert!((state1.player.position_x - state2.player.position_x).abs() < 1e-6);
    }
}
