use std::sync::Arc;
use std::time::Duration;

use hoverlate_io::CursorProvider;
use hoverlate_ocr::Trigger;
use hoverlate_types::CaptureEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::cycle_context::CycleContext;
use crate::events::event_loop;
use crate::trigger::trigger_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub capture: (AsyncSender<CaptureEvent>, AsyncReceiver<CaptureEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            capture: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    ctx: CycleContext,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(ctx: CycleContext) -> Self {
        Self {
            channels: ChannelSet::new(),
            ctx,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Must be called inside a tokio runtime
    pub fn spawn_tasks(
        &self,
        trigger: impl Trigger + 'static,
        cursor: Arc<dyn CursorProvider>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(self.ctx.clone(), self.channels.capture.1.clone()));

        // Trigger loop
        let interval = Duration::from_millis(self.ctx.config.poll_interval_ms);
        let cancel = self.cancel_token.child_token();
        let capture_tx = self.channels.capture.0.clone().to_sync();
        tasks.spawn_blocking(move || {
            trigger_loop(trigger, cursor, interval, cancel, capture_tx);
            Ok(())
        });

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
