use image::imageops;
use image::RgbImage;
use tracing::{debug, info};

use crate::consts::COLLAGE_IMAGE_COUNT;
use crate::error::{PolaroidError, Result};
use crate::framer::{make_polaroid, validate_source};
use crate::photo::{Collage, PageLayout};
use crate::progress::{CollageStage, NoOpReporter, ProgressReporter};

/// Compose four photos into a page, reporting progress through `reporter`.
///
/// Every check (photo count, layout, each photo's dimensions) runs before
/// any resampling, so an invalid request never does partial work. Framer
/// errors are returned unchanged.
pub fn make_collage_reported(
    sources: &[RgbImage],
    layout: &PageLayout,
    reporter: &dyn ProgressReporter,
) -> Result<Collage> {
    reporter.begin_stage(CollageStage::Validating, None);
    let checked = preflight(sources, layout);
    reporter.finish_stage();
    checked?;

    info!(
        canvas = %layout.canvas_size,
        polaroid = %layout.polaroid_size(),
        "Composing collage"
    );

    reporter.begin_stage(CollageStage::Framing, Some(sources.len()));
    let mut polaroids = Vec::with_capacity(sources.len());
    for (i, source) in sources.iter().enumerate() {
        polaroids.push(make_polaroid(source, &layout.polaroid)?);
        reporter.advance(i + 1);
    }
    reporter.finish_stage();

    reporter.begin_stage(CollageStage::Compositing, Some(polaroids.len()));
    let size = layout.canvas_size;
    let mut canvas = RgbImage::from_pixel(size.width, size.height, layout.background.to_rgb());
    let slots = layout.slot_rects();
    let mut contents = Vec::with_capacity(polaroids.len());
    for (i, (polaroid, slot)) in polaroids.iter().zip(&slots).enumerate() {
        debug!(slot = i, position = %slot.position(), "Pasting polaroid");
        imageops::replace(&mut canvas, polaroid.image(), slot.x as i64, slot.y as i64);
        let content = polaroid.content().offset_by(slot.position()).ok_or_else(|| {
            PolaroidError::InvalidLayout(format!("slot {i} content leaves the page"))
        })?;
        contents.push(content);
        reporter.advance(i + 1);
    }
    reporter.finish_stage();

    Ok(Collage::new(canvas, slots, contents))
}

/// Photo count, layout and per-photo checks, all before any resampling.
fn preflight(sources: &[RgbImage], layout: &PageLayout) -> Result<()> {
    if sources.len() != COLLAGE_IMAGE_COUNT {
        return Err(PolaroidError::WrongImageCount {
            expected: COLLAGE_IMAGE_COUNT,
            actual: sources.len(),
        });
    }
    layout.validate()?;
    for source in sources {
        validate_source(source)?;
    }
    Ok(())
}

/// Compose four photos into a page.
pub fn make_collage(sources: &[RgbImage], layout: &PageLayout) -> Result<Collage> {
    make_collage_reported(sources, layout, &NoOpReporter)
}
