/// A4 page width at 300 DPI.
pub const A4_WIDTH: u32 = 2480;

/// A4 page height at 300 DPI.
pub const A4_HEIGHT: u32 = 3508;

/// Outer width of a single polaroid.
pub const POLAROID_WIDTH: u32 = 1100;

/// Outer height of a single polaroid.
pub const POLAROID_HEIGHT: u32 = 1400;

/// Border width on the left, right and top of a polaroid.
pub const DEFAULT_FRAME_WIDTH: u32 = 40;

/// Border height below the photo (the wide "caption" strip).
pub const DEFAULT_BOTTOM_FRAME_HEIGHT: u32 = 100;

/// Top-left corners of the four polaroids on the page, in paste order.
pub const DEFAULT_SLOT_POSITIONS: [(u32, u32); COLLAGE_IMAGE_COUNT] =
    [(100, 100), (1380, 100), (100, 1800), (1380, 1800)];

/// Number of photos in one collage.
pub const COLLAGE_IMAGE_COUNT: usize = 4;

/// JPEG quality used for the downloadable collage.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// File name of the delivered collage.
pub const DEFAULT_OUTPUT_FILE: &str = "output_a4.jpg";
