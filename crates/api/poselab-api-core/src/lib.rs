//! poselab-api-core: shared geometry and raster primitives (core, shell-agnostic)
//!
//! Both core crates (annotation, silhouette) depend on this crate and never
//! on each other. Coordinates are source-image pixels throughout; the core
//! performs no coordinate transforms.

pub mod geom;
pub mod mask;

pub use geom::{Dimensions, Point2};
pub use mask::Mask;
