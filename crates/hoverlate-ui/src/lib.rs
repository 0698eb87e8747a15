use std::cell::RefCell;
use std::rc::Rc;

use hoverlate_config::ui::UiConfig;
use hoverlate_types::OverlayCommand;
use kanal::AsyncReceiver;
use slint::ComponentHandle;

pub mod bridge;
pub mod events;
pub mod state;

pub use bridge::OverlayHandle;
pub use state::OverlayState;

use events::handle_command;

slint::include_modules!();

/// Run the overlay on the current thread until the event loop quits
///
/// Owns the window and its `OverlayState`; commands from `rx` are the only
/// way other threads can change either.
pub fn run_overlay(
    rx: AsyncReceiver<OverlayCommand>,
    config: &UiConfig,
    initial_text: String,
) -> anyhow::Result<()> {
    let window = OverlayWindow::new()?;
    window.set_box_width(config.width as f32);
    window.set_box_height(config.height as f32);
    window.set_text(initial_text.clone().into());

    let state = Rc::new(RefCell::new(OverlayState::new(initial_text)));

    // Click to dismiss
    {
        let window_weak = window.as_weak();
        let state = state.clone();
        window.on_dismissed(move || {
            if let Some(w) = window_weak.upgrade() {
                handle_command(OverlayCommand::Hide, &state, &w);
            }
        });
    }

    {
        let window_weak = window.as_weak();
        slint::spawn_local(async move {
            while let Ok(command) = rx.recv().await {
                let Some(w) = window_weak.upgrade() else {
                    break;
                };
                handle_command(command, &state, &w);
            }
            tracing::info!("[SLINT] Overlay command queue closed");
        })?;
    }

    slint::run_event_loop_until_quit()?;

    Ok(())
}

/// Ask the UI thread to leave its event loop; callable from any thread
pub fn request_quit() {
    if let Err(e) = slint::invoke_from_event_loop(|| {
        let _ = slint::quit_event_loop();
    }) {
        tracing::warn!("Failed to quit UI event loop: {}", e);
    }
}
