//! Poselab Annotation Core (shell-agnostic)
//!
//! Skeleton-labeling data model and sequencing: an immutable joint-hierarchy
//! rig, a sequencer that walks it as the user clicks, a per-image session
//! aggregate, and the export document plus overlay rendering. A UI shell
//! drives these synchronously from its event loop and handles all windowing,
//! file pickers, and on-screen feedback itself.

pub mod document;
pub mod error;
pub mod overlay;
pub mod rig;
pub mod sequencer;
pub mod session;

// Re-exports for consumers (shells)
pub use document::{parse_skeleton_document_json, JointRecord, SkeletonDocument};
pub use error::{AnnotationError, DocumentError, RigError};
pub use overlay::{render_overlay, DEFAULT_MARKER_RADIUS};
pub use rig::{JointDefinition, SkeletonRig};
pub use sequencer::{LabeledPoint, SkeletonSequencer};
pub use session::AnnotationSession;
pub use poselab_api_core::{Dimensions, Point2};
