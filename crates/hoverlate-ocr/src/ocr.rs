use hoverlate_types::RawImage;

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR engine unavailable: {0}")]
    Unavailable(String),

    #[error("no image to recognize")]
    NoImage,

    #[error("screen capture failed: {0}")]
    Capture(String),

    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// Hands out OCR sessions on demand
pub trait OcrProvider: Send + Sync {
    /// Acquire a recognizer; its native resources are released when the session drops
    fn open(&self) -> Result<Box<dyn OcrSession>, OcrError>;
}

pub trait OcrSession {
    fn recognize(&mut self, image: &RawImage) -> Result<String, OcrError>;
}

/// Platform OCR engine for a fixed recognizer language
pub struct SystemOcr {
    language: String,
}

impl SystemOcr {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

#[cfg(windows)]
impl OcrProvider for SystemOcr {
    fn open(&self) -> Result<Box<dyn OcrSession>, OcrError> {
        Ok(Box::new(windows_ocr::WinOcrSession::new(&self.language)?))
    }
}

#[cfg(not(windows))]
impl OcrProvider for SystemOcr {
    fn open(&self) -> Result<Box<dyn OcrSession>, OcrError> {
        Err(OcrError::Unavailable(format!(
            "no OCR engine for '{}' on this platform",
            self.language
        )))
    }
}

#[cfg(windows)]
mod windows_ocr {
    use anyhow::{Context, Result};
    use hoverlate_types::RawImage;
    use windows::{
        Globalization::Language,
        Graphics::Imaging::BitmapDecoder,
        Media::Ocr::OcrEngine as WinOcrEngine,
        Storage::Streams::{DataWriter, InMemoryRandomAccessStream},
        core::HSTRING,
    };

    use super::{OcrError, OcrSession};
    use crate::capture::encode_png;
    use crate::com::ComGuard;

    /// Engine plus the COM apartment it lives in.
    /// Field order matters: the engine is released before COM is torn down.
    pub struct WinOcrSession {
        engine: WinOcrEngine,
        _com: ComGuard,
    }

    impl WinOcrSession {
        pub fn new(language_code: &str) -> Result<Self, OcrError> {
            let com = ComGuard::initialize().map_err(|e| OcrError::Unavailable(format!("{e:#}")))?;

            let language = Language::CreateLanguage(&HSTRING::from(language_code))
                .map_err(|e| OcrError::Unavailable(format!("language {language_code}: {e}")))?;
            let engine = WinOcrEngine::TryCreateFromLanguage(&language)
                .map_err(|e| OcrError::Unavailable(format!("engine for {language_code}: {e}")))?;

            Ok(Self { engine, _com: com })
        }

        fn recognize_png(&self, image_bytes: &[u8]) -> Result<String> {
            let stream = InMemoryRandomAccessStream::new().context("Failed to create stream")?;
            let writer = DataWriter::CreateDataWriter(&stream).context("Failed to create writer")?;

            writer
                .WriteBytes(image_bytes)
                .context("Failed to write image bytes")?;
            writer
                .StoreAsync()
                .context("Failed to store async")?
                .get()
                .context("Failed to store data")?;
            writer.FlushAsync().context("Failed to flush")?.get()?;

            stream.Seek(0).context("Failed to seek")?;

            let decoder = BitmapDecoder::CreateAsync(&stream)
                .context("Failed to create decoder async")?
                .get()
                .context("Failed to get decoder")?;

            let bitmap = decoder
                .GetSoftwareBitmapAsync()
                .context("Failed to get bitmap async")?
                .get()
                .context("Failed to get software bitmap")?;

            let result = self
                .engine
                .RecognizeAsync(&bitmap)
                .context("Failed to recognize async")?
                .get()
                .context("Failed to get OCR result")?;

            Ok(result.Text().context("Failed to get text")?.to_string())
        }
    }

    impl OcrSession for WinOcrSession {
        fn recognize(&mut self, image: &RawImage) -> Result<String, OcrError> {
            let png = encode_png(image)?;
            self.recognize_png(&png)
                .map_err(|e| OcrError::Recognition(format!("{e:#}")))
        }
    }
}
