pub mod clipboard;
pub mod cursor;

pub use clipboard::{ClipboardError, ClipboardProvider, SystemClipboard};
pub use cursor::{CursorProvider, SystemCursor};
