use anyhow::{Context, Result};

/// RAII guard for COM initialization
///
/// Calls CoUninitialize when dropped, on every exit path.
pub struct ComGuard;

impl ComGuard {
    pub fn initialize() -> Result<Self> {
        unsafe {
            windows::Win32::System::Com::CoInitializeEx(
                Some(std::ptr::null()),
                windows::Win32::System::Com::COINIT_MULTITHREADED,
            )
            .ok()
            .with_context(|| "Failed to initialize COM")?;
        }
        Ok(ComGuard)
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        unsafe {
            windows::Win32::System::Com::CoUninitialize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_com_guard_reinitializes_after_drop() {
        {
            let _guard = ComGuard::initialize().unwrap();
        }
        assert!(ComGuard::initialize().is_ok());
    }
}
