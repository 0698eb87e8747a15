use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use hoverlate_config::Config;
use hoverlate_io::SystemCursor;
use hoverlate_ocr::HotkeyManager;
use hoverlate_ui::OverlayHandle;
use tokio::signal;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod cycle_context;
pub mod events;
pub mod extractor;
pub mod trigger;


use self::controller::AppController;
use self::cycle_context::CycleContext;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Arc::new(Config::load_or_default(&Config::path_from_env()));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    // Registered on the UI thread, which runs the platform event loop
    let hotkey = HotkeyManager::new(&config.hotkey)?;
    tracing::info!("Hotkey registered ({})", config.hotkey);

    let (overlay, overlay_rx) = OverlayHandle::channel(256);
    let controller = AppController::new(CycleContext::system(config.clone(), overlay));

    {
        let _enter = runtime.enter();
        let tasks = controller.spawn_tasks(hotkey.trigger(), Arc::new(SystemCursor));
        tokio::spawn(supervise(tasks));
        tokio::spawn(async {
            match signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown requested");
                    hoverlate_ui::request_quit();
                }
                Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
            }
        });
    }

    let result = hoverlate_ui::run_overlay(
        overlay_rx,
        &config.ui,
        format!("Ready. Press {}", config.hotkey),
    );

    controller.shutdown();
    runtime.shutdown_timeout(Duration::from_secs(1));
    drop(hotkey);

    result
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

/// Log background task exits; none of them is expected to end on its own
async fn supervise(mut tasks: JoinSet<anyhow::Result<()>>) {
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => tracing::warn!("background task exited"),
            Ok(Err(e)) => tracing::error!("background task failed: {e:#}"),
            Err(e) => tracing::error!("background task panicked: {e}"),
        }
    }
}
