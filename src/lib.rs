//! Statue Run - a "red light, green light" mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (doll look cycle, player kinematics, game state)
//! - `assets`: Async model-loading boundary
//! - `settings`: Player preferences
//! - `ui`: Headless HUD text helpers

pub mod assets;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Track bounds along the x axis. The player runs from the start
    /// marker toward the end marker (decreasing x).
    pub const START_POSITION: f32 = 3.0;
    pub const END_POSITION: f32 = -START_POSITION;

    /// Player run speed in world units per second
    pub const RUN_SPEED: f32 = 1.8;
    /// Time for velocity to ease down to zero after a stop
    pub const STOP_DECAY_SECS: f32 = 0.35;

    /// Doll turn animation duration
    pub const TURN_DURATION_SECS: f32 = 1.0;
    /// Doll rotation.y when facing the player
    pub const ROT_Y_FORWARD: f32 = 0.0;
    /// Doll rotation.y when facing away
    pub const ROT_Y_BACKWARD: f32 = -3.15;

    /// Doll dwell time facing away (safe to move), seconds
    pub const BACKWARD_DWELL_MIN: f32 = 1.0;
    pub const BACKWARD_DWELL_MAX: f32 = 2.0;
    /// Doll dwell time facing the player, seconds
    pub const FORWARD_DWELL_MIN: f32 = 0.75;
    pub const FORWARD_DWELL_MAX: f32 = 1.5;

    /// Startup sequence: one short beat, then three full-second stages
    pub const START_DELAY_SECS: f32 = 0.5;
    pub const START_STAGE_SECS: f32 = 1.0;
    pub const START_STAGES: u32 = 3;

    /// Round length driving the countdown bar
    pub const TIME_LIMIT_SECS: f32 = 10.0;

    /// Doll model placement
    pub const DOLL_SCALE: f32 = 0.4;
    pub const DOLL_OFFSET_Y: f32 = -1.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out: fast start, gentle finish
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}
