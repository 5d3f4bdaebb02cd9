//! Eased scalar interpolation
//!
//! Small fixed-duration tween advanced by the sim timestep. Used for the
//! doll's turn animation and the player's velocity decay.

use serde::{Deserialize, Serialize};

use crate::{ease_out_quad, lerp};

/// A scalar tween from `from` to `to` over `duration` seconds with
/// quadratic ease-out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the current value
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Current value without advancing
    pub fn value(&self) -> f32 {
        let t = ease_out_quad(self.elapsed / self.duration);
        lerp(self.from, self.to, t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_endpoints() {
        let mut tw = Tween::new(0.0, 10.0, 1.0);
        assert_eq!(tw.value(), 0.0);
        tw.advance(1.0);
        assert!(tw.finished());
        assert!((tw.value() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_tween_monotonic_decay() {
        // Decaying tween (10 -> 0) must never increase
        let mut tw = Tween::new(10.0, 0.0, 0.35);
        let mut prev = tw.value();
        for _ in 0..100 {
            let v = tw.advance(0.01);
            assert!(v <= prev + 1e-6);
            prev = v;
        }
        assert!(tw.finished());
        assert!(tw.value().abs() < 1e-4);
    }

    #[test]
    fn test_tween_ease_out_front_loads_motion() {
        // Ease-out covers more than half the distance in the first half
        let mut tw = Tween::new(0.0, 1.0, 1.0);
        let mid = tw.advance(0.5);
        assert!(mid > 0.5);
    }
}
