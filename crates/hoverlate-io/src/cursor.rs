use mouse_position::mouse_position::Mouse;

pub trait CursorProvider: Send + Sync {
    /// Current cursor position in screen coordinates, `None` if the OS refused
    fn position(&self) -> Option<(i32, i32)>;
}

pub struct SystemCursor;

impl CursorProvider for SystemCursor {
    fn position(&self) -> Option<(i32, i32)> {
        match Mouse::get_mouse_position() {
            Mouse::Position { x, y } => Some((x, y)),
            Mouse::Error => None,
        }
    }
}
