use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Width and height of an image or canvas, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left corner of something placed on a canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle. `right()` and `bottom()` are exclusive and
/// saturate at `u32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(position: Position, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Exclusive right edge, `None` when it does not fit in a `u32`.
    pub fn checked_right(&self) -> Option<u32> {
        self.x.checked_add(self.width)
    }

    /// Exclusive bottom edge, `None` when it does not fit in a `u32`.
    pub fn checked_bottom(&self) -> Option<u32> {
        self.y.checked_add(self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Translate by `offset`, or `None` if a corner leaves the `u32` range.
    pub fn offset_by(&self, offset: Position) -> Option<Rect> {
        let moved = Rect::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
            self.width,
            self.height,
        );
        moved.checked_right()?;
        moved.checked_bottom()?;
        Some(moved)
    }
}

/// Largest size with the aspect ratio of `source` that fits inside `bounds`.
///
/// Width-first: take the full bounds width and derive the height. If that
/// height overflows, derive the width from the full bounds height instead.
/// Both dimensions are rounded to the nearest pixel and kept at least 1.
pub fn fit_within(source: Size, bounds: Size) -> Size {
    let aspect = source.aspect_ratio();

    let width = bounds.width;
    let height = round_px(width as f64 / aspect);
    if height <= bounds.height {
        return Size::new(width, height);
    }

    let height = bounds.height;
    let width = round_px(height as f64 * aspect).min(bounds.width);
    Size::new(width, height)
}

/// Paste offset of `content` inside a polaroid canvas of `canvas` size.
///
/// Horizontally centered. Vertically centered over the band above the bottom
/// border, which leaves extra headroom above and the wide strip below; the
/// offset never rises above `frame_width`.
pub fn content_offset(
    canvas: Size,
    content: Size,
    frame_width: u32,
    bottom_frame_height: u32,
) -> Position {
    let x = canvas.width.saturating_sub(content.width) / 2;
    let y = canvas
        .height
        .saturating_sub(content.height)
        .saturating_sub(bottom_frame_height)
        / 2;
    Position::new(x, y.max(frame_width))
}

fn round_px(value: f64) -> u32 {
    (value.round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_landscape_is_width_bound() {
        let fitted = fit_within(Size::new(800, 600), Size::new(1020, 1260));
        assert_eq!(fitted, Size::new(1020, 765));
    }

    #[test]
    fn test_fit_portrait_is_height_bound() {
        let fitted = fit_within(Size::new(600, 800), Size::new(1020, 1260));
        assert_eq!(fitted, Size::new(945, 1260));
    }

    #[test]
    fn test_fit_extreme_panorama_keeps_one_row() {
        let fitted = fit_within(Size::new(100_000, 1), Size::new(1020, 1260));
        assert_eq!(fitted, Size::new(1020, 1));
    }

    #[test]
    fn test_offset_clamped_to_frame_width() {
        let offset = content_offset(Size::new(1100, 1400), Size::new(945, 1260), 40, 100);
        assert_eq!(offset, Position::new(77, 40));
    }

    #[test]
    fn test_offset_keeps_asymmetric_headroom() {
        let offset = content_offset(Size::new(1100, 1400), Size::new(1020, 765), 40, 100);
        assert_eq!(offset, Position::new(40, 267));
    }

    #[test]
    fn test_rect_edges_near_u32_max() {
        let r = Rect::new(u32::MAX - 10, 0, 90, 90);
        assert_eq!(r.checked_right(), None);
        assert_eq!(r.right(), u32::MAX);
        assert!(!Rect::new(0, 0, 200, 200).contains_rect(&r));
        assert_eq!(Rect::new(5, 5, 10, 10).offset_by(Position::new(u32::MAX - 8, 0)), None);
        assert_eq!(
            Rect::new(5, 5, 10, 10).offset_by(Position::new(100, 200)),
            Some(Rect::new(105, 205, 10, 10))
        );
    }

    #[test]
    fn test_rect_intersects_edges_exclusive() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
        assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
    }
}
