use std::cell::RefCell;

use hoverlate_types::OverlayCommand;
use slint::ComponentHandle;

use crate::OverlayWindow;
use crate::state::OverlayState;

/// Apply a command to the state and mirror it onto the window.
/// UI thread only.
pub fn handle_command(command: OverlayCommand, state: &RefCell<OverlayState>, window: &OverlayWindow) {
    state.borrow_mut().apply(&command);

    match command {
        OverlayCommand::MoveTo { x, y } => {
            window
                .window()
                .set_position(slint::PhysicalPosition::new(x, y));
            tracing::debug!("[SLINT] Overlay moved to ({}, {})", x, y);
        }
        OverlayCommand::Show => {
            if let Err(e) = window.show() {
                tracing::error!("[SLINT] Failed to show overlay: {}", e);
            }
        }
        OverlayCommand::Hide => {
            if let Err(e) = window.hide() {
                tracing::error!("[SLINT] Failed to hide overlay: {}", e);
            }
        }
        OverlayCommand::SetText(text) => {
            tracing::debug!("[SLINT] Overlay text: {} chars", text.len());
            window.set_text(text.into());
        }
    }
}
