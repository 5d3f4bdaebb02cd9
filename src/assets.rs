//! Async model-loading boundary
//!
//! The doll's 3D model is a single opaque resource fetched at startup. Only
//! the load lifecycle is modeled here; parsing and display belong to the
//! front-end. Progress is logged, failure is logged and otherwise ignored -
//! the game runs without the visual.

use serde::{Deserialize, Serialize};

/// Where the doll model stands in its load lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AssetStatus {
    /// Fetch not yet started or still in flight
    Pending,
    /// Partial progress, 0.0..1.0
    Loading(f32),
    Ready,
    Failed,
}

/// Events reported by the platform loader
#[derive(Debug, Clone)]
pub enum AssetEvent {
    Progress(f32),
    Loaded,
    Error(String),
}

/// Fold a loader event into the doll's asset status
pub fn apply_asset_event(doll: &mut crate::sim::Doll, event: AssetEvent) {
    match event {
        AssetEvent::Progress(fraction) => {
            log::info!("Doll model {:.0}% loaded", fraction * 100.0);
            // Ready and Failed are terminal; a straggling progress
            // callback must not reopen the lifecycle
            if matches!(doll.asset, AssetStatus::Pending | AssetStatus::Loading(_)) {
                doll.asset = AssetStatus::Loading(fraction);
            }
        }
        AssetEvent::Loaded => doll.attach_model(),
        AssetEvent::Error(reason) => doll.model_failed(&reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Doll;

    #[test]
    fn test_progress_then_loaded() {
        let mut doll = Doll::new();
        apply_asset_event(&mut doll, AssetEvent::Progress(0.5));
        assert_eq!(doll.asset, AssetStatus::Loading(0.5));
        apply_asset_event(&mut doll, AssetEvent::Loaded);
        assert_eq!(doll.asset, AssetStatus::Ready);
    }

    #[test]
    fn test_late_progress_does_not_demote_ready() {
        let mut doll = Doll::new();
        apply_asset_event(&mut doll, AssetEvent::Loaded);
        apply_asset_event(&mut doll, AssetEvent::Progress(0.9));
        assert_eq!(doll.asset, AssetStatus::Ready);
    }

    #[test]
    fn test_late_progress_does_not_revive_failed() {
        let mut doll = Doll::new();
        apply_asset_event(&mut doll, AssetEvent::Error("timeout".into()));
        apply_asset_event(&mut doll, AssetEvent::Progress(0.3));
        assert_eq!(doll.asset, AssetStatus::Failed);
    }

    #[test]
    fn test_error_marks_failed_only() {
        let mut doll = Doll::new();
        apply_asset_event(&mut doll, AssetEvent::Error("network".into()));
        assert_eq!(doll.asset, AssetStatus::Failed);
    }
}
