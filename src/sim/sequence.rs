//! Startup sequence and round timer
//!
//! The round opens with a fixed beat sequence (one short delay, then three
//! full-second stages). When it completes the game flips to Running, the
//! round timer arms, and the doll's first cycle starts.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed startup beat sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSequence {
    /// Stages completed so far (0..=START_STAGES)
    pub stage: u32,
    /// Time left in the current stage
    remaining: f32,
}

impl StartSequence {
    pub fn new() -> Self {
        Self {
            stage: 0,
            remaining: START_DELAY_SECS,
        }
    }

    /// Advance by one timestep. Returns the stage number when a stage
    /// boundary is crossed, so the front-end can update its prompt.
    pub fn advance(&mut self, dt: f32) -> Option<u32> {
        if self.complete() {
            return None;
        }
        self.remaining -= dt;
        if self.remaining > 0.0 {
            return None;
        }
        self.stage += 1;
        self.remaining += START_STAGE_SECS;
        Some(self.stage)
    }

    /// All stages done: the round may begin
    pub fn complete(&self) -> bool {
        self.stage > START_STAGES
    }

    /// Total wall time the sequence takes
    pub fn total_secs() -> f32 {
        START_DELAY_SECS + START_STAGES as f32 * START_STAGE_SECS
    }
}

impl Default for StartSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Countdown-bar timer for one round
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundTimer {
    remaining: f32,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self {
            remaining: TIME_LIMIT_SECS,
        }
    }

    /// Count down, clamping at zero. Running out does not end the round by
    /// itself - the bar is a visual, the loss rule is undefined.
    pub fn advance(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn remaining_secs(&self) -> f32 {
        self.remaining
    }

    /// Fraction left, for the shrinking bar
    pub fn fraction_remaining(&self) -> f32 {
        self.remaining / TIME_LIMIT_SECS
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}
