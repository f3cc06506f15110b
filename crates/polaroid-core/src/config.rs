use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_FILE};
use crate::photo::PageLayout;

/// Everything needed to turn four photos into a delivered page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollageConfig {
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// JPEG quality, 1-100.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}
fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
