use hoverlate_types::{CaptureRegion, RawImage};
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use xcap::Monitor;

use crate::ocr::OcrError;

/// Source of fresh screen bitmaps
pub trait ScreenCapture: Send + Sync {
    fn capture_region(&self, region: CaptureRegion) -> Result<RawImage, OcrError>;
}

pub struct SystemScreen;

impl ScreenCapture for SystemScreen {
    /// Capture a region of the monitor under the region's centre,
    /// clamped to that monitor's bounds
    fn capture_region(&self, region: CaptureRegion) -> Result<RawImage, OcrError> {
        let monitors =
            Monitor::all().map_err(|e| OcrError::Capture(format!("failed to get monitors: {e}")))?;

        let all_bounds: Vec<CaptureRegion> = monitors
            .iter()
            .map(|m| CaptureRegion {
                x: m.x(),
                y: m.y(),
                width: m.width(),
                height: m.height(),
            })
            .collect();

        let (cx, cy) = region.center();
        let index = pick_monitor(&all_bounds, cx, cy)
            .ok_or_else(|| OcrError::Capture("no monitor found".to_string()))?;
        let monitor = &monitors[index];
        let bounds = all_bounds[index];
        let region = region.clamp_to(bounds);

        let image = monitor
            .capture_image()
            .map_err(|e| OcrError::Capture(format!("failed to capture screen: {e}")))?;

        let cropped = xcap::image::imageops::crop_imm(
            &image,
            (region.x - bounds.x) as u32,
            (region.y - bounds.y) as u32,
            region.width,
            region.height,
        )
        .to_image();

        Ok(RawImage {
            width: cropped.width(),
            height: cropped.height(),
            data: cropped.into_raw(),
        })
    }
}

/// Index of the monitor containing the point, else the first monitor
fn pick_monitor(monitors: &[CaptureRegion], x: i32, y: i32) -> Option<usize> {
    monitors
        .iter()
        .position(|bounds| bounds.contains(x, y))
        .or((!monitors.is_empty()).then_some(0))
}

#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn encode_png(image: &RawImage) -> Result<Vec<u8>, OcrError> {
    let expected = image.width as usize * image.height as usize * 4;
    if image.data.len() != expected {
        return Err(OcrError::Recognition(format!(
            "RGBA buffer holds {} bytes, expected {}",
            image.data.len(),
            expected
        )));
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(&image.data, image.width, image.height, ExtendedColorType::Rgba8)
        .map_err(|e| OcrError::Recognition(format!("failed to encode PNG: {e}")))?;
    Ok(buffer)
}
