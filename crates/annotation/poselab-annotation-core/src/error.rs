//! Error types for the annotation core.
//!
//! Everything here is a synchronous precondition violation: recoverable,
//! local, never a transient fault. The shell reports and carries on.

use serde::{Deserialize, Serialize};

/// Rig construction-time validation failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RigError {
    /// Rig has no joints at all
    #[error("rig has no joints")]
    Empty,

    /// Two joints share a name
    #[error("duplicate joint name: {name}")]
    DuplicateJoint { name: String },

    /// A joint names itself as its parent
    #[error("joint '{name}' names itself as parent")]
    SelfParent { name: String },

    /// The first entry must be the parentless root
    #[error("first joint must be the parentless root, got '{name}'")]
    RootNotFirst { name: String },

    /// Only the first joint may omit a parent
    #[error("joint '{name}' is a second root; only the first joint may omit a parent")]
    MultipleRoots { name: String },

    /// A joint references a parent that is not in the rig
    #[error("joint '{joint}' references unknown parent '{parent}'")]
    MissingParent { joint: String, parent: String },

    /// A joint appears before its parent in the labeling order
    #[error("joint '{joint}' is defined before its parent '{parent}'")]
    ParentAfterChild { joint: String, parent: String },
}

/// Export-time failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnnotationError {
    /// Export requested with zero labeled points
    #[error("nothing to export: no labeled points in the session")]
    NothingToExport,
}

/// Skeleton-document parse/serialize failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DocumentError {
    /// JSON syntax or shape mismatch
    #[error("skeleton document parse error: {reason}")]
    Parse { reason: String },

    /// Width or height is zero
    #[error("skeleton document has a zero dimension: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// The skeleton record list is empty
    #[error("skeleton document contains no joint records")]
    EmptySkeleton,
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_round_trip_through_serde() {
        let err = RigError::MissingParent {
            joint: "left_knee".to_string(),
            parent: "left_hip".to_string(),
        };
        let serialized = serde_json::to_string(&err).unwrap();
        let deserialized: RigError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn display_carries_context() {
        let err = DocumentError::ZeroDimension {
            width: 0,
            height: 480,
        };
        assert_eq!(
            err.to_string(),
            "skeleton document has a zero dimension: 0x480"
        );
    }
}
