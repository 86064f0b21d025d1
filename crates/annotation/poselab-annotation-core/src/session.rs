//! Per-image annotation session: the aggregate a UI shell owns and drives.
//!
//! One session exists per loaded image; loading the next image replaces the
//! session wholesale rather than merging into it. Nothing here is
//! thread-safe and nothing needs to be: the shell calls in synchronously
//! from its event loop. A future multi-image UI must own one session per
//! image.

use poselab_api_core::Dimensions;

use crate::document::SkeletonDocument;
use crate::error::AnnotationError;
use crate::rig::{JointDefinition, SkeletonRig};
use crate::sequencer::{LabeledPoint, SkeletonSequencer};

/// Source-image dimensions plus the labeling sequencer over one rig.
#[derive(Clone, Debug)]
pub struct AnnotationSession {
    dims: Dimensions,
    sequencer: SkeletonSequencer,
}

impl AnnotationSession {
    /// Start a session for a freshly loaded image. Dimensions are captured
    /// here and immutable for the session's lifetime.
    pub fn new(dims: Dimensions, rig: SkeletonRig) -> Self {
        log::debug!(
            "starting annotation session: {}x{}, {} joints",
            dims.width,
            dims.height,
            rig.len()
        );
        Self {
            dims,
            sequencer: SkeletonSequencer::new(rig),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn sequencer(&self) -> &SkeletonSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut SkeletonSequencer {
        &mut self.sequencer
    }

    /// The joint the next click will label.
    pub fn current_target(&self) -> &JointDefinition {
        self.sequencer.current_target()
    }

    /// Forward a click, already translated into image pixel space by the
    /// shell. `None` once the rig is fully labeled.
    pub fn submit_point(&mut self, x: i32, y: i32) -> Option<LabeledPoint> {
        self.sequencer.submit_point(x, y)
    }

    /// Snapshot the labeled points as a persistable document.
    pub fn export_document(&self) -> Result<SkeletonDocument, AnnotationError> {
        SkeletonDocument::from_points(self.dims, self.sequencer.export_points())
    }
}
