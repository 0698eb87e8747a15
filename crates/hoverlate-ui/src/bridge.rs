use hoverlate_types::OverlayCommand;
use kanal::{AsyncReceiver, AsyncSender};

/// Thread-safe handle to the overlay
///
/// Every call queues a command; only the UI thread drains the queue and
/// touches the window. Commands are applied in the order they are queued.
#[derive(Clone)]
pub struct OverlayHandle {
    tx: AsyncSender<OverlayCommand>,
}

impl OverlayHandle {
    pub fn channel(capacity: usize) -> (Self, AsyncReceiver<OverlayCommand>) {
        let (tx, rx) = kanal::bounded_async(capacity);
        (Self { tx }, rx)
    }

    pub async fn move_to(&self, x: i32, y: i32) {
        self.send(OverlayCommand::MoveTo { x, y }).await;
    }

    pub async fn show(&self) {
        self.send(OverlayCommand::Show).await;
    }

    pub async fn set_text(&self, text: impl Into<String>) {
        self.send(OverlayCommand::SetText(text.into())).await;
    }

    async fn send(&self, command: OverlayCommand) {
        if let Err(e) = self.tx.send(command).await {
            tracing::warn!("Overlay is gone, dropping command: {}", e);
        }
    }
}
