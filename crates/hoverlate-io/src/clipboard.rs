use arboard::Clipboard;
use hoverlate_types::RawImage;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard holds no content of the requested kind")]
    Empty,

    #[error("clipboard access failed: {0}")]
    Access(String),
}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        match e {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(e.to_string()),
            other => ClipboardError::Access(other.to_string()),
        }
    }
}

/// Blocking clipboard access
pub trait ClipboardProvider: Send + Sync {
    fn read_text(&self) -> Result<String, ClipboardError>;

    fn read_image(&self) -> Result<RawImage, ClipboardError>;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// OS clipboard through arboard, one short-lived handle per call
pub struct SystemClipboard;

impl SystemClipboard {
    fn open() -> Result<Clipboard, ClipboardError> {
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl ClipboardProvider for SystemClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        Ok(Self::open()?.get_text()?)
    }

    fn read_image(&self) -> Result<RawImage, ClipboardError> {
        let image = Self::open()?.get_image()?;
        Ok(RawImage {
            width: image.width as u32,
            height: image.height as u32,
            data: image.bytes.into_owned(),
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        Ok(Self::open()?.set_text(text.to_string())?)
    }
}
