use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolaroidError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error(
        "Invalid frame geometry: {width}x{height} canvas with frame {frame_width} px \
         and bottom frame {bottom_frame_height} px leaves no interior"
    )]
    InvalidGeometry {
        width: u32,
        height: u32,
        frame_width: u32,
        bottom_frame_height: u32,
    },

    #[error("Expected exactly {expected} images, got {actual}")]
    WrongImageCount { expected: usize, actual: usize },

    #[error("Invalid page layout: {0}")]
    InvalidLayout(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PolaroidError>;
