//! The persisted skeleton document and its JSON round-trip.
//!
//! On-disk shape: `{ width, height, skeleton: [{ loc: [x, y], name, parent }] }`
//! with one record per labeled point in submission order. The root record's
//! parent is the literal string `"null"`, matching the established file
//! format; in-memory points carry `Option<String>` instead.

use serde::{Deserialize, Serialize};

use poselab_api_core::Dimensions;

use crate::error::{AnnotationError, DocumentError};
use crate::sequencer::LabeledPoint;

/// Parent value written for the root record.
pub const ROOT_PARENT: &str = "null";

/// One exported joint record. `loc` is `[x, y]` in source-image pixels.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct JointRecord {
    pub loc: [i32; 2],
    pub name: String,
    pub parent: String,
}

/// The full persisted annotation for one image.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SkeletonDocument {
    pub width: u32,
    pub height: u32,
    pub skeleton: Vec<JointRecord>,
}

impl SkeletonDocument {
    /// Snapshot labeled points into the persistable shape.
    /// Fails when there is nothing to export.
    pub fn from_points(
        dims: Dimensions,
        points: &[LabeledPoint],
    ) -> Result<Self, AnnotationError> {
        if points.is_empty() {
            log::warn!("skeleton export requested with no labeled points");
            return Err(AnnotationError::NothingToExport);
        }
        let skeleton = points
            .iter()
            .map(|p| JointRecord {
                loc: p.loc.into(),
                name: p.name.clone(),
                parent: p.parent.clone().unwrap_or_else(|| ROOT_PARENT.to_string()),
            })
            .collect();
        Ok(Self {
            width: dims.width,
            height: dims.height,
            skeleton,
        })
    }

    /// Serialize for the shell to write to disk.
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate basic invariants (non-zero extent, at least one record).
    pub fn validate_basic(&self) -> Result<(), DocumentError> {
        if self.width == 0 || self.height == 0 {
            return Err(DocumentError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.skeleton.is_empty() {
            return Err(DocumentError::EmptySkeleton);
        }
        Ok(())
    }
}

/// Parse a previously written skeleton document and re-check its invariants.
pub fn parse_skeleton_document_json(s: &str) -> Result<SkeletonDocument, DocumentError> {
    let doc: SkeletonDocument = serde_json::from_str(s)?;
    doc.validate_basic()?;
    Ok(doc)
}
