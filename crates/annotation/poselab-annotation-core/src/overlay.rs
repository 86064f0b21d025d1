//! Joint overlay rendering: the source image plus a disc per labeled point.
//!
//! Purely a visualization export; no downstream algorithm reads it. The
//! source buffer is copied, never mutated.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::error::AnnotationError;
use crate::sequencer::LabeledPoint;

/// Marker radius used by the interactive tool.
pub const DEFAULT_MARKER_RADIUS: i32 = 5;

const MARKER_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Copy `source` and stamp a filled white disc of `radius` pixels at every
/// labeled point. Fails when there are no points to draw.
pub fn render_overlay(
    source: &RgbImage,
    points: &[LabeledPoint],
    radius: i32,
) -> Result<RgbImage, AnnotationError> {
    if points.is_empty() {
        log::warn!("overlay export requested with no labeled points");
        return Err(AnnotationError::NothingToExport);
    }
    let mut canvas = source.clone();
    for point in points {
        draw_filled_circle_mut(&mut canvas, (point.loc.x, point.loc.y), radius, MARKER_COLOR);
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poselab_api_core::Point2;

    fn labeled(x: i32, y: i32) -> LabeledPoint {
        LabeledPoint {
            loc: Point2::new(x, y),
            name: "root".to_string(),
            parent: None,
        }
    }

    #[test]
    fn empty_point_set_is_rejected() {
        let source = RgbImage::new(10, 10);
        assert!(matches!(
            render_overlay(&source, &[], DEFAULT_MARKER_RADIUS),
            Err(AnnotationError::NothingToExport)
        ));
    }

    #[test]
    fn marker_is_stamped_and_source_untouched() {
        let source = RgbImage::new(20, 20);
        let overlay = render_overlay(&source, &[labeled(10, 10)], 2).unwrap();

        assert_eq!(overlay.get_pixel(10, 10).0, [255, 255, 255]);
        assert_eq!(overlay.get_pixel(10, 12).0, [255, 255, 255]);
        // well outside the disc
        assert_eq!(overlay.get_pixel(0, 0).0, [0, 0, 0]);
        // the source is a fresh copy, not an alias
        assert_eq!(source.get_pixel(10, 10).0, [0, 0, 0]);
    }

    #[test]
    fn markers_near_the_edge_are_clipped_not_fatal() {
        let source = RgbImage::new(8, 8);
        let overlay = render_overlay(&source, &[labeled(0, 0)], 3).unwrap();
        assert_eq!(overlay.get_pixel(0, 0).0, [255, 255, 255]);
    }
}
