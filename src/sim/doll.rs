//! Doll look-cycle state machine
//!
//! The doll alternates between facing away from the player (safe to move)
//! and facing the player, with randomized dwell times. The original version
//! of this was an unconditional self-rescheduling timer loop that could not
//! be stopped; here it is an explicit state machine advanced by the fixed
//! timestep, with `stop` as the cancellation path.
//!
//! The turn animation and the dwell countdown run concurrently: the dwell
//! clock starts the moment a turn is scheduled, so the time between two
//! transitions is exactly the drawn dwell. A short dwell may interrupt an
//! unfinished turn, in which case the next turn starts from wherever the
//! rotation currently is.

use serde::{Deserialize, Serialize};

use super::state::RngState;
use super::tween::Tween;
use crate::assets::AssetStatus;
use crate::consts::*;
use rand::Rng;

/// Which way the doll is (or is turning to be) oriented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    /// Toward the player: moving is dangerous
    Forward,
    /// Away from the player: safe to move
    Backward,
}

impl Facing {
    fn opposite(self) -> Self {
        match self {
            Facing::Forward => Facing::Backward,
            Facing::Backward => Facing::Forward,
        }
    }

    fn rot_y(self) -> f32 {
        match self {
            Facing::Forward => ROT_Y_FORWARD,
            Facing::Backward => ROT_Y_BACKWARD,
        }
    }

    pub(crate) fn dwell_range(self) -> (f32, f32) {
        match self {
            Facing::Forward => (FORWARD_DWELL_MIN, FORWARD_DWELL_MAX),
            Facing::Backward => (BACKWARD_DWELL_MIN, BACKWARD_DWELL_MAX),
        }
    }
}

/// Look-cycle state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DollLook {
    /// Not cycling (before the round starts, or after `stop`)
    Idle,
    /// Committed to `facing`: the turn tween rotates toward it while the
    /// dwell countdown runs alongside
    Facing {
        facing: Facing,
        tween: Tween,
        remaining: f32,
    },
}

/// The doll NPC: an orientation angle, the look-cycle machine, and the
/// status of its async-loaded model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doll {
    /// Current rotation around the vertical axis (radians)
    pub rot_y: f32,
    pub look: DollLook,
    /// Completed turn count; keys the per-cycle dwell RNG stream
    pub cycle: u64,
    /// Model load status. Orientation state advances regardless - a failed
    /// load leaves the doll invisible but the cycle keeps running.
    pub asset: AssetStatus,
}

impl Doll {
    pub fn new() -> Self {
        Self {
            rot_y: ROT_Y_FORWARD,
            look: DollLook::Idle,
            cycle: 0,
            asset: AssetStatus::Pending,
        }
    }

    /// Start turning away from the player
    pub fn look_backward(&mut self, rng_state: &RngState) {
        self.turn_to(Facing::Backward, rng_state);
    }

    /// Start turning toward the player
    pub fn look_forward(&mut self, rng_state: &RngState) {
        self.turn_to(Facing::Forward, rng_state);
    }

    fn turn_to(&mut self, target: Facing, rng_state: &RngState) {
        let mut rng = rng_state.cycle_rng(self.cycle);
        let (min, max) = target.dwell_range();
        let dwell = rng.random_range(min..max);
        self.cycle += 1;
        log::debug!(
            "Doll turning {:?} for {:.2}s (cycle {})",
            target,
            dwell,
            self.cycle
        );
        self.look = DollLook::Facing {
            facing: target,
            tween: Tween::new(self.rot_y, target.rot_y(), TURN_DURATION_SECS),
            remaining: dwell,
        };
    }

    /// Kick the first cycle. Each cycle begins facing backward, so the
    /// round always opens with a safe window.
    pub fn start_cycle(&mut self, rng_state: &RngState) {
        if matches!(self.look, DollLook::Idle) {
            self.look_backward(rng_state);
        }
    }

    /// Cancel the look cycle
    pub fn stop(&mut self) {
        self.look = DollLook::Idle;
    }

    /// The orientation the doll is turning toward or holding
    pub fn current_facing(&self) -> Option<Facing> {
        match self.look {
            DollLook::Facing { facing, .. } => Some(facing),
            DollLook::Idle => None,
        }
    }

    /// Advance the look cycle by one timestep
    pub fn update(&mut self, dt: f32, rng_state: &RngState) {
        match self.look {
            DollLook::Idle => {}
            DollLook::Facing {
                facing,
                mut tween,
                remaining,
            } => {
                self.rot_y = tween.advance(dt);
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.turn_to(facing.opposite(), rng_state);
                } else {
                    self.look = DollLook::Facing {
                        facing,
                        tween,
                        remaining,
                    };
                }
            }
        }
    }

    /// Record that the model finished loading. Idempotent.
    pub fn attach_model(&mut self) {
        if self.asset != AssetStatus::Ready {
            log::info!("Doll model attached");
            self.asset = AssetStatus::Ready;
        }
    }

    /// Record a failed model load. The game continues without the doll's
    /// visual; only the load itself is reported.
    pub fn model_failed(&mut self, reason: &str) {
        log::error!("Doll model failed to load: {}", reason);
        self.asset = AssetStatus::Failed;
    }
}

impl Default for Doll {
    fn default() -> Self {
        Self::new()
    }
}
