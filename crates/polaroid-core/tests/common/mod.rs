#![allow(dead_code)]

use image::{Rgb, RgbImage};
use polaroid_core::geometry::{Position, Size};
use polaroid_core::photo::{Color, FrameGeometry, PageLayout};

pub const RED: [u8; 3] = [200, 30, 30];
pub const GREEN: [u8; 3] = [30, 200, 30];
pub const BLUE: [u8; 3] = [30, 30, 200];
pub const YELLOW: [u8; 3] = [220, 210, 40];

/// Solid-colour RGB image.
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Image with a horizontal and vertical ramp, so resampling is not trivial.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgb([r, g, 128])
    })
}

/// Four solid photos of different shapes and colours.
pub fn four_solids() -> Vec<RgbImage> {
    vec![
        solid(80, 60, RED),
        solid(60, 80, GREEN),
        solid(50, 50, BLUE),
        solid(96, 54, YELLOW),
    ]
}

/// A small 2x2 layout that keeps resampling cheap in tests.
///
/// 200x200 page, 90x90 polaroids, frame 5, bottom frame 15.
pub fn small_layout() -> PageLayout {
    PageLayout {
        canvas_size: Size::new(200, 200),
        slot_positions: vec![
            Position::new(5, 5),
            Position::new(105, 5),
            Position::new(5, 105),
            Position::new(105, 105),
        ],
        polaroid: small_geometry(),
        background: Color::WHITE,
    }
}

pub fn small_geometry() -> FrameGeometry {
    FrameGeometry {
        output_size: Size::new(90, 90),
        frame_width: 5,
        bottom_frame_height: 15,
        background: Color::WHITE_SMOKE,
        border: Color::WHITE,
    }
}

/// Per-channel comparison allowing for resampling round-off.
pub fn assert_close(actual: [u8; 3], expected: [u8; 3], tolerance: u8) {
    for c in 0..3 {
        let diff = (actual[c] as i16 - expected[c] as i16).unsigned_abs();
        assert!(
            diff <= tolerance as u16,
            "channel {c}: got {actual:?}, expected {expected:?} (tolerance {tolerance})"
        );
    }
}
