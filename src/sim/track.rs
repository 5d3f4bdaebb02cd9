//! Static track geometry
//!
//! The start/end markers and the bar between them, kept as pure data so the
//! front-end can materialize them however it likes. No behavior.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{END_POSITION, START_POSITION};

/// Track bar color
const BAR_COLOR: u32 = 0xe5a716;
/// Marker post color
const POST_COLOR: u32 = 0xfbc851;

/// One axis-aligned box in the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeSpec {
    /// Width, height, depth
    pub size: Vec3,
    pub position: Vec3,
    pub rotation_y: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Start/end boundary markers for the player's traversal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub start_position: f32,
    pub end_position: f32,
    pub cubes: Vec<CubeSpec>,
}

impl Track {
    pub fn new() -> Self {
        let bar = CubeSpec {
            size: Vec3::new(START_POSITION * 2.0 + 0.2, 1.5, 1.0),
            position: Vec3::new(0.0, 0.0, -1.0),
            rotation_y: 0.0,
            color: BAR_COLOR,
        };
        let start_post = CubeSpec {
            size: Vec3::new(0.2, 1.5, 1.0),
            position: Vec3::new(START_POSITION, 0.0, 0.0),
            rotation_y: -0.35,
            color: POST_COLOR,
        };
        let end_post = CubeSpec {
            size: Vec3::new(0.2, 1.5, 1.0),
            position: Vec3::new(END_POSITION, 0.0, 0.0),
            rotation_y: 0.35,
            color: POST_COLOR,
        };

        Self {
            start_position: START_POSITION,
            end_position: END_POSITION,
            cubes: vec![bar, start_post, end_post],
        }
    }

    /// Total distance the player has to cover
    pub fn length(&self) -> f32 {
        self.start_position - self.end_position
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
