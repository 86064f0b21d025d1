//! Silhouette image materialization.
//!
//! The interactive tool writes the isolated character as an RGB raster:
//! mask-true pixels white, everything else black. The single-channel
//! variant lives on [`Mask::to_gray_image`].

use image::{Rgb, RgbImage};

use poselab_api_core::Mask;

/// Render the mask as a white-on-black RGB image of the same extent.
pub fn silhouette_image(mask: &Mask) -> RgbImage {
    RgbImage::from_fn(mask.width(), mask.height(), |x, y| {
        if mask.get(x, y) == Some(true) {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}
