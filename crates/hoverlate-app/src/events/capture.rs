use hoverlate_config::CopyMode;
use hoverlate_types::{CaptureEvent, ExtractedContent};

use crate::cycle_context::CycleContext;

pub const PROCESSING_TEXT: &str = "Processing…";
pub const NO_TEXT_FOUND: &str = "No text found.";

/// One capture-translate-render cycle
///
/// Always ends with exactly one terminal `set_text`, a translation or an
/// error message. Nothing here can fail the caller.
pub async fn handle_capture(ctx: CycleContext, event: CaptureEvent) {
    let offset = ctx.config.ui.cursor_offset;
    ctx.overlay
        .move_to(event.cursor_x + offset, event.cursor_y + offset)
        .await;
    ctx.overlay.show().await;
    ctx.overlay.set_text(PROCESSING_TEXT).await;

    let message = run_cycle(&ctx, event).await;

    tracing::debug!(
        ">>> [CYCLE] ({}, {}) done in {:?}",
        event.cursor_x,
        event.cursor_y,
        event.timestamp.elapsed()
    );
    ctx.overlay.set_text(message).await;
}

async fn run_cycle(ctx: &CycleContext, event: CaptureEvent) -> String {
    let extractor = ctx.extractor.clone();
    let content = match tokio::task::spawn_blocking(move || extractor.extract(&event)).await {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(">>> [CYCLE] Extraction task error: {}", e);
            ExtractedContent::Empty
        }
    };

    let Some(text) = content.text() else {
        return NO_TEXT_FOUND.to_string();
    };
    tracing::debug!(">>> [CYCLE] Translating {} chars via {}", text.len(), ctx.translator.name());

    match ctx.translator.translate(text).await {
        Ok(translation) => {
            let result = translation.text();
            if ctx.config.copy_mode == CopyMode::OverwriteWithResult {
                copy_to_clipboard(ctx, result.clone()).await;
            }
            result
        }
        Err(e) => {
            tracing::warn!(">>> [CYCLE] Translation failed: {}", e);
            e.to_string()
        }
    }
}

async fn copy_to_clipboard(ctx: &CycleContext, text: String) {
    let clipboard = ctx.clipboard.clone();
    match tokio::task::spawn_blocking(move || clipboard.write_text(&text)).await {
        Ok(Ok(())) => tracing::debug!(">>> [CYCLE] Translation copied to clipboard"),
        Ok(Err(e)) => tracing::warn!(">>> [CYCLE] Failed to copy translation: {}", e),
        Err(e) => tracing::error!(">>> [CYCLE] Clipboard task error: {}", e),
    }
}
