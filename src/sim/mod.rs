//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod doll;
pub mod player;
pub mod sequence;
pub mod state;
pub mod tick;
pub mod track;
pub mod tween;

pub use doll::{Doll, DollLook, Facing};
pub use player::Player;
pub use sequence::{RoundTimer, StartSequence};
pub use state::{GamePhase, GameState, Outcome, RngState};
pub use tick::{TickInput, tick};
pub use track::{CubeSpec, Track};
pub use tween::Tween;
