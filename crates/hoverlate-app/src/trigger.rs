use std::sync::Arc;
use std::time::Duration;

use hoverlate_io::CursorProvider;
use hoverlate_ocr::Trigger;
use hoverlate_types::CaptureEvent;
use kanal::Sender;
use tokio_util::sync::CancellationToken;

/// Poll the trigger until cancelled, emitting a capture per detection
///
/// Blocking. The cursor is read on the polling thread right after detection;
/// everything downstream happens on other tasks. A failed cursor read reuses
/// the last known position instead of stopping the loop.
pub fn trigger_loop(
    trigger: impl Trigger,
    cursor: Arc<dyn CursorProvider>,
    interval: Duration,
    cancel: CancellationToken,
    capture_tx: Sender<CaptureEvent>,
) {
    let mut last_position = (0, 0);

    while !cancel.is_cancelled() {
        if trigger.poll() {
            let (x, y) = match cursor.position() {
                Some(position) => {
                    last_position = position;
                    position
                }
                None => {
                    tracing::warn!("Cursor position unavailable, reusing {:?}", last_position);
                    last_position
                }
            };

            tracing::info!("Hotkey pressed at ({}, {})", x, y);
            if capture_tx.send(CaptureEvent::new(x, y)).is_err() {
                tracing::info!("Capture queue closed, trigger loop stopping");
                return;
            }
        }

        std::thread::sleep(interval);
    }

    tracing::info!("Trigger loop stopping");
}
