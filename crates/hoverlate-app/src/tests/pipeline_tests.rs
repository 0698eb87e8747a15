use std::sync::Arc;
use std::time::Duration;

use hoverlate_config::{Config, CopyMode};
use hoverlate_translator::{BaiduTranslator, TranslateError};
use hoverlate_types::{CaptureEvent, OverlayCommand};
use hoverlate_ui::OverlayState;
use kanal::AsyncReceiver;
use tokio::time::timeout;

use super::fakes::{FakeClipboard, FakeCursor, FakeTranslator, FakeTrigger, harness, translation};
use crate::controller::AppController;
use crate::events::capture::{NO_TEXT_FOUND, PROCESSING_TEXT, handle_capture};

async fn collect(rx: &AsyncReceiver<OverlayCommand>, n: usize) -> Vec<OverlayCommand> {
    let mut commands = Vec::with_capacity(n);
    for _ in 0..n {
        let command = timeout(Duration::from_secs(3), rx.recv())
            .await
            .expect("timed out waiting for overlay command")
            .expect("overlay channel closed");
        commands.push(command);
    }
    commands
}

fn texts(commands: &[OverlayCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter_map(|c| match c {
            OverlayCommand::SetText(text) if text != PROCESSING_TEXT => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_cycle_moves_shows_and_renders_translation() {
    let h = harness(
        Config::default(),
        FakeClipboard::with_texts(&["hello"]),
        FakeTranslator::default(),
    );

    handle_capture(h.ctx.clone(), CaptureEvent::new(100, 200)).await;

    let commands = collect(&h.overlay_rx, 4).await;
    assert_eq!(
        commands,
        vec![
            OverlayCommand::MoveTo { x: 120, y: 220 },
            OverlayCommand::Show,
            OverlayCommand::SetText(PROCESSING_TEXT.to_string()),
            OverlayCommand::SetText("HELLO".to_string()),
        ]
    );
    assert_eq!(*h.translator.calls.lock().unwrap(), vec!["hello"]);
}

#[tokio::test]
async fn test_multi_segment_translation_joined() {
    let h = harness(
        Config::default(),
        FakeClipboard::with_texts(&["a\nb"]),
        FakeTranslator::default().reply("a\nb", Duration::ZERO, Ok(translation(&["A", "B"]))),
    );

    handle_capture(h.ctx.clone(), CaptureEvent::new(0, 0)).await;

    let commands = collect(&h.overlay_rx, 4).await;
    assert_eq!(texts(&commands), vec!["A\nB"]);
}

#[tokio::test]
async fn test_nothing_to_translate_shows_no_text_found() {
    let h = harness(
        Config::default(),
        FakeClipboard::failing(),
        FakeTranslator::default(),
    );

    handle_capture(h.ctx.clone(), CaptureEvent::new(0, 0)).await;

    let commands = collect(&h.overlay_rx, 4).await;
    assert_eq!(texts(&commands), vec![NO_TEXT_FOUND]);
    assert!(h.translator.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_copy_mode_dst_writes_result_to_clipboard() {
    let config = Config {
        copy_mode: CopyMode::OverwriteWithResult,
        ..Default::default()
    };
    let h = harness(
        config,
        FakeClipboard::with_texts(&["copy me"]),
        FakeTranslator::default(),
    );

    handle_capture(h.ctx.clone(), CaptureEvent::new(0, 0)).await;

    assert_eq!(*h.clipboard.writes.lock().unwrap(), vec!["COPY ME"]);
}

#[tokio::test]
async fn test_copy_mode_src_leaves_clipboard() {
    let h = harness(
        Config::default(),
        FakeClipboard::with_texts(&["keep me"]),
        FakeTranslator::default(),
    );

    handle_capture(h.ctx.clone(), CaptureEvent::new(0, 0)).await;

    assert!(h.clipboard.writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_error_rendered_and_not_copied() {
    let config = Config {
        copy_mode: CopyMode::OverwriteWithResult,
        ..Default::default()
    };
    let h = harness(
        config,
        FakeClipboard::with_texts(&["text"]),
        FakeTranslator::default().reply(
            "text",
            Duration::ZERO,
            Err(TranslateError::ApiError {
                code: "54001".to_string(),
                message: "Invalid Sign".to_string(),
            }),
        ),
    );

    handle_capture(h.ctx.clone(), CaptureEvent::new(0, 0)).await;

    let commands = collect(&h.overlay_rx, 4).await;
    assert_eq!(texts(&commands), vec!["API error 54001: Invalid Sign"]);
    assert!(h.clipboard.writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_credentials_message() {
    let mut h = harness(
        Config::default(),
        FakeClipboard::with_texts(&["hello"]),
        FakeTranslator::default(),
    );
    h.ctx.translator = Arc::new(BaiduTranslator::new(h.ctx.config.translator.clone()));

    handle_capture(h.ctx.clone(), CaptureEvent::new(0, 0)).await;

    let commands = collect(&h.overlay_rx, 4).await;
    assert_eq!(texts(&commands), vec!["Error: AppID not configured"]);
}

/// Overlapping cycles are not ordered by trigger time: whichever network
/// call finishes last owns the overlay.
#[tokio::test]
async fn test_overlapping_cycles_last_completion_wins() {
    let h = harness(
        Config::default(),
        FakeClipboard::with_texts(&["first", "second"]),
        FakeTranslator::default()
            .reply("first", Duration::from_millis(400), Ok(translation(&["FIRST"])))
            .reply("second", Duration::from_millis(20), Ok(translation(&["SECOND"]))),
    );

    let cycle1 = tokio::spawn(handle_capture(h.ctx.clone(), CaptureEvent::new(10, 10)));
    // Let cycle 1 take the first clipboard read and reach the network call
    timeout(Duration::from_secs(1), async {
        while h.translator.calls.lock().unwrap().is_empty() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();
    let cycle2 = tokio::spawn(handle_capture(h.ctx.clone(), CaptureEvent::new(50, 50)));

    let commands = collect(&h.overlay_rx, 8).await;
    cycle1.await.unwrap();
    cycle2.await.unwrap();

    assert_eq!(texts(&commands), vec!["SECOND", "FIRST"]);

    let mut state = OverlayState::new("Ready. Press F1");
    for command in &commands {
        state.apply(command);
    }
    assert!(state.visible);
    assert_eq!(state.displayed_text, "FIRST");
    // Cycle 2 moved the overlay last
    assert_eq!(state.position, (70, 70));
}

#[tokio::test]
async fn test_malformed_reply_keeps_trigger_loop_responsive() {
    let config = Config {
        poll_interval_ms: 5,
        ..Default::default()
    };
    let h = harness(
        config,
        FakeClipboard::with_texts(&["one", "two"]),
        FakeTranslator::default().reply(
            "one",
            Duration::ZERO,
            Err(TranslateError::ParseError(
                "expected value at line 1 column 1".to_string(),
            )),
        ),
    );

    let controller = AppController::new(h.ctx.clone());
    let trigger = FakeTrigger::default();
    let mut tasks = controller.spawn_tasks(trigger.clone(), Arc::new(FakeCursor::fixed(300, 300)));

    trigger.press();
    let first = collect(&h.overlay_rx, 4).await;
    assert_eq!(
        texts(&first),
        vec!["Parse error: expected value at line 1 column 1"]
    );

    trigger.press();
    let second = collect(&h.overlay_rx, 4).await;
    assert_eq!(texts(&second), vec!["TWO"]);

    controller.shutdown();
    tasks.abort_all();
}
