use anyhow::{Context, Result};
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey},
};

/// Anything the trigger loop can poll
pub trait Trigger: Send {
    /// Non-blocking, true if the trigger fired since the last poll
    fn poll(&self) -> bool;
}

/// Owns the OS registration of the global hotkey
///
/// Must be created on the thread that runs the platform event loop and kept
/// alive for as long as the hotkey should stay registered.
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl HotkeyManager {
    /// Register the hotkey described by `accelerator`, falling back to F1 if it cannot be parsed
    pub fn new(accelerator: &str) -> Result<Self> {
        let hotkey = parse_hotkey(accelerator);
        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;

        manager
            .register(hotkey)
            .with_context(|| format!("Failed to register hotkey {accelerator}"))?;

        Ok(Self { manager, hotkey })
    }

    /// Pollable handle that can move to another thread
    pub fn trigger(&self) -> HotkeyTrigger {
        HotkeyTrigger {
            id: self.hotkey.id(),
        }
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        let _ = self.manager.unregister(self.hotkey);
    }
}

fn parse_hotkey(accelerator: &str) -> HotKey {
    accelerator.parse::<HotKey>().unwrap_or_else(|e| {
        tracing::warn!("Invalid hotkey '{}' ({}), using F1", accelerator, e);
        HotKey::new(None, Code::F1)
    })
}

#[derive(Debug, Clone, Copy)]
pub struct HotkeyTrigger {
    id: u32,
}

impl Trigger for HotkeyTrigger {
    fn poll(&self) -> bool {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.try_recv() {
            if event.id == self.id && matches!(event.state, HotKeyState::Pressed) {
                return true;
            }
        }
        false
    }
}
