//! Poselab Silhouette Core (shell-agnostic)
//!
//! Converts a user-traced closed polygon into a binary silhouette mask at
//! source-image resolution. Independent of the annotation crate; a UI shell
//! feeds vertices in while in drawing mode and asks for the mask when the
//! trace is finished.

pub mod boundary;
pub mod error;
pub mod raster;
pub mod render;

pub use boundary::PolygonBoundary;
pub use error::SilhouetteError;
pub use raster::{rasterize, MIN_VERTICES};
pub use render::silhouette_image;
pub use poselab_api_core::{Dimensions, Mask, Point2};
