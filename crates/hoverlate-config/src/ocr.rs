use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

fn default_capture_width() -> u32 {
    400
}

fn default_capture_height() -> u32 {
    120
}

/// Where the OCR tier gets its bitmap from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Image currently held by the clipboard
    Clipboard,
    /// Fresh capture of the screen around the cursor
    Screen,
    #[default]
    ClipboardThenScreen,
}

impl ImageSource {
    pub fn uses_clipboard(self) -> bool {
        matches!(self, ImageSource::Clipboard | ImageSource::ClipboardThenScreen)
    }

    pub fn uses_screen(self) -> bool {
        matches!(self, ImageSource::Screen | ImageSource::ClipboardThenScreen)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// BCP-47 tag handed to the recognizer
    #[serde(default = "default_language")]
    pub language: String,
    pub image_source: ImageSource,
    #[serde(default = "default_capture_width")]
    pub capture_width: u32,
    #[serde(default = "default_capture_height")]
    pub capture_height: u32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            language: default_language(),
            image_source: ImageSource::default(),
            capture_width: default_capture_width(),
            capture_height: default_capture_height(),
        }
    }
}
