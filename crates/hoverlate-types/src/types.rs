use std::time::Instant;

/// Produced once per hotkey detection, consumed by exactly one capture cycle
#[derive(Debug, Clone, Copy)]
pub struct CaptureEvent {
    pub cursor_x: i32,
    pub cursor_y: i32,
    pub timestamp: Instant,
}

impl CaptureEvent {
    pub fn new(cursor_x: i32, cursor_y: i32) -> Self {
        Self {
            cursor_x,
            cursor_y,
            timestamp: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedContent {
    PlainText { text: String, source: TextSource },
    Empty,
}

impl ExtractedContent {
    pub fn text(&self) -> Option<&str> {
        match self {
            ExtractedContent::PlainText { text, .. } => Some(text),
            ExtractedContent::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Clipboard,
    Ocr,
}

/// Mutations of the overlay, marshalled onto the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayCommand {
    MoveTo { x: i32, y: i32 },
    Show,
    Hide,
    SetText(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// Region of the given size centred on a point
    pub fn centered_on(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x: x - (width / 2) as i32,
            y: y - (height / 2) as i32,
            width,
            height,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        (
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && (x as i64) < self.x as i64 + self.width as i64
            && (y as i64) < self.y as i64 + self.height as i64
    }

    /// Shift and shrink the region so it lies inside the given bounds
    pub fn clamp_to(self, bounds: CaptureRegion) -> Self {
        let width = self.width.min(bounds.width);
        let height = self.height.min(bounds.height);
        let max_x = bounds.x + (bounds.width - width) as i32;
        let max_y = bounds.y + (bounds.height - height) as i32;

        Self {
            x: self.x.clamp(bounds.x, max_x),
            y: self.y.clamp(bounds.y, max_y),
            width,
            height,
        }
    }
}

/// Tightly packed RGBA8 pixels
#[derive(Debug, Clone)]
pub struct RawImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RawImage {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }
}
