use image::imageops::{self, FilterType};
use image::RgbImage;
use tracing::debug;

use crate::error::{PolaroidError, Result};
use crate::geometry::{content_offset, fit_within, Rect, Size};
use crate::photo::{FrameGeometry, Polaroid};

/// Reject sources with no pixels.
pub fn validate_source(source: &RgbImage) -> Result<Size> {
    let size = Size::of(source);
    if size.is_empty() {
        return Err(PolaroidError::InvalidImage {
            width: size.width,
            height: size.height,
        });
    }
    Ok(size)
}

/// Frame one photo as a polaroid.
///
/// The photo is scaled to fit the interior without distortion (Lanczos3),
/// pasted onto a card of `geometry.output_size` filled with
/// `geometry.background`, and the band of `frame_width` around the interior
/// is stroked with `geometry.border`. The stroke never reaches inside the
/// interior, so the pasted photo is left untouched.
pub fn make_polaroid(source: &RgbImage, geometry: &FrameGeometry) -> Result<Polaroid> {
    let source_size = validate_source(source)?;
    let interior = geometry.interior_rect()?;

    let fitted = fit_within(source_size, interior.size());
    let offset = content_offset(
        geometry.output_size,
        fitted,
        geometry.frame_width,
        geometry.bottom_frame_height,
    );
    debug!(
        source = %source_size,
        fitted = %fitted,
        offset = %offset,
        "Framing photo"
    );

    let resized = imageops::resize(source, fitted.width, fitted.height, FilterType::Lanczos3);

    let Size { width, height } = geometry.output_size;
    let background = geometry.background.to_rgb();
    let mut canvas = RgbImage::from_pixel(width, height, background);
    imageops::replace(&mut canvas, &resized, offset.x as i64, offset.y as i64);

    stroke_outside(
        &mut canvas,
        &interior,
        geometry.frame_width,
        geometry.border.to_rgb(),
    );

    Ok(Polaroid::new(canvas, Rect::at(offset, fitted)))
}

/// Paint a band of `stroke` pixels around the outside of `rect`, clipped to
/// the canvas. Pixels inside `rect` are never written.
fn stroke_outside(canvas: &mut RgbImage, rect: &Rect, stroke: u32, color: image::Rgb<u8>) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let x0 = rect.x.saturating_sub(stroke);
    let y0 = rect.y.saturating_sub(stroke);
    let x1 = rect.right().saturating_add(stroke).min(canvas_w);
    let y1 = rect.bottom().saturating_add(stroke).min(canvas_h);

    for y in y0..y1 {
        for x in x0..x1 {
            if !rect.contains_point(x, y) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_stroke_leaves_interior_untouched() {
        let mut canvas = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let interior = Rect::new(3, 3, 4, 4);
        stroke_outside(&mut canvas, &interior, 2, Rgb([9, 9, 9]));

        for y in 0..10 {
            for x in 0..10 {
                let px = canvas.get_pixel(x, y).0;
                if interior.contains_point(x, y) {
                    assert_eq!(px, [0, 0, 0], "interior pixel ({x},{y}) overwritten");
                } else if (1..9).contains(&x) && (1..9).contains(&y) {
                    assert_eq!(px, [9, 9, 9], "band pixel ({x},{y}) not stroked");
                } else {
                    assert_eq!(px, [0, 0, 0], "pixel ({x},{y}) outside band stroked");
                }
            }
        }
    }
}
