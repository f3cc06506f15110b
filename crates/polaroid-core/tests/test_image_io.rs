mod common;

use common::{assert_close, gradient, solid, GREEN};
use polaroid_core::error::PolaroidError;
use polaroid_core::io::image_io::{
    decode_photo, encode_jpeg, load_photo, save_image, save_jpeg, save_png,
};

#[test]
fn test_jpeg_bytes_decode_to_same_size() {
    let img = solid(64, 48, GREEN);
    let bytes = encode_jpeg(&img, 95).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8], "missing JPEG SOI marker");

    let decoded = decode_photo(&bytes).unwrap();
    assert_eq!(decoded.dimensions(), (64, 48));
    assert_close(decoded.get_pixel(32, 24).0, GREEN, 4);
}

#[test]
fn test_higher_quality_is_larger() {
    let img = gradient(128, 128);
    let low = encode_jpeg(&img, 10).unwrap();
    let high = encode_jpeg(&img, 95).unwrap();
    assert!(high.len() > low.len(), "q95 {} <= q10 {}", high.len(), low.len());
}

#[test]
fn test_save_jpeg_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.jpg");
    save_jpeg(&solid(40, 30, GREEN), &path, 95).unwrap();

    let loaded = load_photo(&path).unwrap();
    assert_eq!(loaded.dimensions(), (40, 30));
}

#[test]
fn test_png_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.png");
    let img = gradient(33, 17);
    save_png(&img, &path).unwrap();

    let loaded = load_photo(&path).unwrap();
    assert_eq!(loaded.as_raw(), img.as_raw());
}

#[test]
fn test_save_image_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let img = gradient(20, 20);

    let png = dir.path().join("out.png");
    save_image(&img, &png).unwrap();
    assert_eq!(&std::fs::read(&png).unwrap()[1..4], b"PNG");

    let jpg = dir.path().join("out.jpg");
    save_image(&img, &jpg).unwrap();
    assert_eq!(&std::fs::read(&jpg).unwrap()[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_decode_garbage_fails() {
    let err = decode_photo(b"definitely not an image").unwrap_err();
    assert!(matches!(err, PolaroidError::ImageError(_)), "got {err:?}");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_photo(&dir.path().join("missing.jpg")).is_err());
}
