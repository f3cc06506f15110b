use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::consts::{
    A4_HEIGHT, A4_WIDTH, COLLAGE_IMAGE_COUNT, DEFAULT_BOTTOM_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH,
    DEFAULT_SLOT_POSITIONS, POLAROID_HEIGHT, POLAROID_WIDTH,
};
use crate::error::{PolaroidError, Result};
use crate::geometry::{Position, Rect, Size};

/// 8-bit sRGB colour, serialised as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const WHITE_SMOKE: Color = Color([245, 245, 245]);

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb(self.0)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Outer size and border thicknesses of a single polaroid.
///
/// The left, right and top borders share `frame_width`; the bottom border is
/// `bottom_frame_height`, usually thicker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    pub output_size: Size,
    pub frame_width: u32,
    pub bottom_frame_height: u32,
    /// Fill of the polaroid card.
    #[serde(default = "default_polaroid_background")]
    pub background: Color,
    /// Stroke painted in the band of `frame_width` around the interior.
    #[serde(default = "default_border")]
    pub border: Color,
}

fn default_polaroid_background() -> Color {
    Color::WHITE_SMOKE
}

fn default_border() -> Color {
    Color::WHITE
}

fn default_page_background() -> Color {
    Color::WHITE
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            output_size: Size::new(POLAROID_WIDTH, POLAROID_HEIGHT),
            frame_width: DEFAULT_FRAME_WIDTH,
            bottom_frame_height: DEFAULT_BOTTOM_FRAME_HEIGHT,
            background: Color::WHITE_SMOKE,
            border: Color::WHITE,
        }
    }
}

impl FrameGeometry {
    /// Size of the area left for the photo once the borders are removed.
    pub fn interior(&self) -> Result<Size> {
        let horizontal = self.frame_width.checked_mul(2);
        let vertical = self.frame_width.checked_add(self.bottom_frame_height);

        let width = horizontal.and_then(|b| self.output_size.width.checked_sub(b));
        let height = vertical.and_then(|b| self.output_size.height.checked_sub(b));

        match (width, height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                Ok(Size::new(width, height))
            }
            _ => Err(PolaroidError::InvalidGeometry {
                width: self.output_size.width,
                height: self.output_size.height,
                frame_width: self.frame_width,
                bottom_frame_height: self.bottom_frame_height,
            }),
        }
    }

    /// The interior as a rectangle in polaroid coordinates.
    pub fn interior_rect(&self) -> Result<Rect> {
        let interior = self.interior()?;
        Ok(Rect::new(
            self.frame_width,
            self.frame_width,
            interior.width,
            interior.height,
        ))
    }
}

/// Page canvas and the four fixed slots the polaroids are pasted into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub canvas_size: Size,
    /// Top-left corner of each polaroid, in paste order.
    pub slot_positions: Vec<Position>,
    /// Geometry shared by every polaroid on the page.
    #[serde(default)]
    pub polaroid: FrameGeometry,
    #[serde(default = "default_page_background")]
    pub background: Color,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            canvas_size: Size::new(A4_WIDTH, A4_HEIGHT),
            slot_positions: DEFAULT_SLOT_POSITIONS
                .iter()
                .copied()
                .map(Position::from)
                .collect(),
            polaroid: FrameGeometry::default(),
            background: Color::WHITE,
        }
    }
}

impl PageLayout {
    pub fn polaroid_size(&self) -> Size {
        self.polaroid.output_size
    }

    /// Destination rectangle of every slot, in paste order.
    pub fn slot_rects(&self) -> Vec<Rect> {
        let size = self.polaroid_size();
        self.slot_positions
            .iter()
            .map(|&pos| Rect::at(pos, size))
            .collect()
    }

    /// Check slot count, slot bounds, slot overlap and polaroid geometry.
    pub fn validate(&self) -> Result<()> {
        if self.slot_positions.len() != COLLAGE_IMAGE_COUNT {
            return Err(PolaroidError::InvalidLayout(format!(
                "expected {COLLAGE_IMAGE_COUNT} slot positions, got {}",
                self.slot_positions.len()
            )));
        }

        self.polaroid.interior()?;

        let page = Rect::at(Position::default(), self.canvas_size);
        let rects = self.slot_rects();
        for (i, rect) in rects.iter().enumerate() {
            let fits_u32 = rect.checked_right().is_some() && rect.checked_bottom().is_some();
            if !fits_u32 || !page.contains_rect(rect) {
                return Err(PolaroidError::InvalidLayout(format!(
                    "slot {i} at {} with size {} exceeds the {} canvas",
                    rect.position(),
                    rect.size(),
                    self.canvas_size
                )));
            }
            if let Some(j) = rects[..i].iter().position(|other| other.intersects(rect)) {
                return Err(PolaroidError::InvalidLayout(format!(
                    "slot {i} at {} overlaps slot {j}",
                    rect.position()
                )));
            }
        }
        Ok(())
    }
}

/// A framed photo: the full card plus where the photo sits on it.
#[derive(Clone, Debug)]
pub struct Polaroid {
    image: RgbImage,
    content: Rect,
}

impl Polaroid {
    pub(crate) fn new(image: RgbImage, content: Rect) -> Self {
        Self { image, content }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn size(&self) -> Size {
        Size::of(&self.image)
    }

    /// Region occupied by the scaled photo, in polaroid coordinates.
    pub fn content(&self) -> Rect {
        self.content
    }
}

/// The finished page with its four polaroids.
#[derive(Clone, Debug)]
pub struct Collage {
    image: RgbImage,
    slots: Vec<Rect>,
    contents: Vec<Rect>,
}

impl Collage {
    pub(crate) fn new(image: RgbImage, slots: Vec<Rect>, contents: Vec<Rect>) -> Self {
        Self {
            image,
            slots,
            contents,
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn size(&self) -> Size {
        Size::of(&self.image)
    }

    /// Page rectangle of each polaroid, in paste order.
    pub fn slots(&self) -> &[Rect] {
        &self.slots
    }

    /// Page rectangle of each scaled photo, in paste order.
    pub fn contents(&self) -> &[Rect] {
        &self.contents
    }
}
