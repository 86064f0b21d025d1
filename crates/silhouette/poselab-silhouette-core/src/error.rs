//! Error types for the silhouette core.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SilhouetteError {
    /// Rasterization requested before the trace can form a polygon.
    /// The boundary is left intact so the user may keep adding vertices.
    #[error("polygon needs at least 3 vertices to rasterize, got {got}")]
    InsufficientVertices { got: usize },
}
