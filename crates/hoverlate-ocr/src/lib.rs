mod capture;
#[cfg(windows)]
mod com;
mod hotkey;
mod ocr;

pub use capture::{ScreenCapture, SystemScreen};
pub use hotkey::{HotkeyManager, HotkeyTrigger, Trigger};
pub use ocr::{OcrError, OcrProvider, OcrSession, SystemOcr};
