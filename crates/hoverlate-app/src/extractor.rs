use std::sync::Arc;

use hoverlate_config::ocr::OcrConfig;
use hoverlate_io::ClipboardProvider;
use hoverlate_ocr::{OcrError, OcrProvider, ScreenCapture};
use hoverlate_types::{CaptureEvent, CaptureRegion, ExtractedContent, RawImage, TextSource};

/// Answers "what text is the user pointing at": clipboard text first, OCR second
pub struct ContentExtractor {
    clipboard: Arc<dyn ClipboardProvider>,
    screen: Arc<dyn ScreenCapture>,
    ocr: Arc<dyn OcrProvider>,
    config: OcrConfig,
}

impl ContentExtractor {
    pub fn new(
        clipboard: Arc<dyn ClipboardProvider>,
        screen: Arc<dyn ScreenCapture>,
        ocr: Arc<dyn OcrProvider>,
        config: OcrConfig,
    ) -> Self {
        Self {
            clipboard,
            screen,
            ocr,
            config,
        }
    }

    /// Blocking; run it off the async workers
    pub fn extract(&self, event: &CaptureEvent) -> ExtractedContent {
        match self.clipboard.read_text() {
            Ok(text) if !text.trim().is_empty() => {
                tracing::debug!("Clipboard text: {} chars", text.len());
                return ExtractedContent::PlainText {
                    text,
                    source: TextSource::Clipboard,
                };
            }
            Ok(_) => tracing::debug!("Clipboard text is blank"),
            Err(e) => tracing::debug!("Clipboard text unavailable: {}", e),
        }

        if !self.config.enabled {
            tracing::debug!("OCR disabled, nothing to translate");
            return ExtractedContent::Empty;
        }

        match self.recognize(event) {
            Ok(text) if !text.trim().is_empty() => {
                tracing::debug!("OCR text: {} chars", text.len());
                ExtractedContent::PlainText {
                    text: text.trim().to_string(),
                    source: TextSource::Ocr,
                }
            }
            Ok(_) => {
                tracing::debug!("OCR recognized nothing");
                ExtractedContent::Empty
            }
            Err(e) => {
                tracing::warn!("OCR fallback failed: {}", e);
                ExtractedContent::Empty
            }
        }
    }

    fn recognize(&self, event: &CaptureEvent) -> Result<String, OcrError> {
        let image = self.acquire_image(event)?;

        // Session drops at the end of this scope on every path
        let mut session = self.ocr.open()?;
        session.recognize(&image)
    }

    fn acquire_image(&self, event: &CaptureEvent) -> Result<RawImage, OcrError> {
        let source = self.config.image_source;

        if source.uses_clipboard() {
            match self.clipboard.read_image() {
                Ok(image) if !image.is_empty() => {
                    tracing::debug!("Using clipboard image {}x{}", image.width, image.height);
                    return Ok(image);
                }
                Ok(_) => tracing::debug!("Clipboard image is empty"),
                Err(e) => tracing::debug!("Clipboard image unavailable: {}", e),
            }
        }

        if source.uses_screen() {
            let region = CaptureRegion::centered_on(
                event.cursor_x,
                event.cursor_y,
                self.config.capture_width,
                self.config.capture_height,
            );
            tracing::debug!("Capturing screen region {:?}", region);
            return self.screen.capture_region(region);
        }

        Err(OcrError::NoImage)
    }
}
