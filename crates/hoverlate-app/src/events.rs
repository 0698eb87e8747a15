use hoverlate_types::CaptureEvent;
use kanal::AsyncReceiver;

use crate::cycle_context::CycleContext;

pub mod capture;

use capture::handle_capture;

/// Spawns one independent capture cycle per event
///
/// Cycles are not awaited, debounced, or ordered against each other.
pub async fn event_loop(ctx: CycleContext, capture_rx: AsyncReceiver<CaptureEvent>) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Waiting for captures");

    while let Ok(event) = capture_rx.recv().await {
        tracing::debug!(
            "[EVENT_LOOP] Capture at ({}, {})",
            event.cursor_x,
            event.cursor_y
        );
        tokio::spawn(handle_capture(ctx.clone(), event));
    }

    tracing::info!("[EVENT_LOOP] Capture queue closed");
    Ok(())
}
