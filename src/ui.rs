//! HUD text helpers
//!
//! Pure view logic shared by the front-end, kept out of the sim so it can
//! be tested headlessly.

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Prompt text per start-sequence stage, ending with the go signal
pub const STAGE_LABELS: [&str; 4] = ["3", "2", "1", "Run!"];

/// The prompt the HUD should show right now, if any.
///
/// The final stage is emitted on the same tick the sequence is consumed
/// and the round starts, so the go signal is held up for one extra beat
/// of the round instead of reading it off the (already gone) sequence.
pub fn start_prompt(state: &GameState) -> Option<&'static str> {
    if let Some(ref seq) = state.start_sequence {
        if seq.stage > 0 {
            return Some(STAGE_LABELS[(seq.stage as usize - 1).min(3)]);
        }
        return None;
    }

    if state.phase == GamePhase::Running {
        let elapsed = state
            .round_timer
            .map(|t| TIME_LIMIT_SECS - t.remaining_secs())
            .unwrap_or(f32::MAX);
        if elapsed < START_STAGE_SECS {
            return Some(STAGE_LABELS[3]);
        }
    }
    None
}
