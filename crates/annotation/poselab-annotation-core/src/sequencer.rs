//! The labeling sequencer: walks the rig in order as points come in.

use serde::{Deserialize, Serialize};

use poselab_api_core::Point2;

use crate::rig::{JointDefinition, SkeletonRig};

/// A user-supplied pixel coordinate bound to one joint of the rig.
/// Immutable once created; `parent` is `None` for the root point.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub loc: Point2,
    pub name: String,
    pub parent: Option<String>,
}

/// Enforces labeling order and accumulates labeled points.
///
/// The cursor is cyclic modulo rig length, so `current_target` always
/// succeeds. The terminal condition is "one point per joint": once the
/// accumulated count equals the rig length, further submissions are
/// silently ignored (no replacement of earlier points). Callers that want
/// to surface the overflow can check [`is_complete`](Self::is_complete).
#[derive(Clone, Debug)]
pub struct SkeletonSequencer {
    rig: SkeletonRig,
    cursor: usize,
    points: Vec<LabeledPoint>,
}

impl SkeletonSequencer {
    pub fn new(rig: SkeletonRig) -> Self {
        let points = Vec::with_capacity(rig.len());
        Self {
            rig,
            cursor: 0,
            points,
        }
    }

    pub fn rig(&self) -> &SkeletonRig {
        &self.rig
    }

    /// Clears accumulated points and rewinds the cursor. Never fails.
    pub fn reset(&mut self) {
        self.points.clear();
        self.cursor = 0;
    }

    /// The joint the next submission will label. The shell prompts with
    /// its name ("Label the point: <name>").
    pub fn current_target(&self) -> &JointDefinition {
        self.rig.joint(self.cursor)
    }

    /// Bind (x, y) to the current target and advance the cursor.
    ///
    /// Returns `None` once every joint has a point; the submission is then
    /// a no-op and earlier points are left untouched. On success the
    /// created point is returned so the shell can render a marker.
    pub fn submit_point(&mut self, x: i32, y: i32) -> Option<LabeledPoint> {
        if self.is_complete() {
            log::debug!("ignoring point ({x}, {y}): rig is fully labeled");
            return None;
        }
        let target = self.current_target();
        let point = LabeledPoint {
            loc: Point2::new(x, y),
            name: target.name.clone(),
            parent: target.parent.clone(),
        };
        self.points.push(point.clone());
        self.cursor = (self.cursor + 1) % self.rig.len();
        Some(point)
    }

    /// Read-only snapshot in submission order. Empty means nothing to export.
    pub fn export_points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Whether every joint in the rig has been labeled.
    pub fn is_complete(&self) -> bool {
        self.points.len() == self.rig.len()
    }
}
