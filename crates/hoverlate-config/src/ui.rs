use serde::{Deserialize, Serialize};

fn default_width() -> u32 {
    300
}

fn default_height() -> u32 {
    100
}

fn default_cursor_offset() -> i32 {
    20
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Distance between the cursor and the overlay's top-left corner
    #[serde(default = "default_cursor_offset")]
    pub cursor_offset: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cursor_offset: default_cursor_offset(),
        }
    }
}
