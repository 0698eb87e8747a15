use std::sync::Arc;

use hoverlate_config::Config;
use hoverlate_io::{ClipboardProvider, SystemClipboard};
use hoverlate_ocr::{SystemOcr, SystemScreen};
use hoverlate_translator::{BaiduTranslator, Translator};
use hoverlate_ui::OverlayHandle;

use crate::extractor::ContentExtractor;

/// Everything one capture cycle needs, cheap to clone into a task
#[derive(Clone)]
pub struct CycleContext {
    pub config: Arc<Config>,
    pub overlay: OverlayHandle,
    pub extractor: Arc<ContentExtractor>,
    pub translator: Arc<dyn Translator>,
    pub clipboard: Arc<dyn ClipboardProvider>,
}

impl CycleContext {
    /// Wire the platform clipboard, screen, OCR and the Baidu backend
    pub fn system(config: Arc<Config>, overlay: OverlayHandle) -> Self {
        let clipboard: Arc<dyn ClipboardProvider> = Arc::new(SystemClipboard);
        let extractor = ContentExtractor::new(
            clipboard.clone(),
            Arc::new(SystemScreen),
            Arc::new(SystemOcr::new(config.ocr.language.clone())),
            config.ocr.clone(),
        );
        let translator = BaiduTranslator::new(config.translator.clone());

        Self {
            config,
            overlay,
            extractor: Arc::new(extractor),
            translator: Arc::new(translator),
            clipboard,
        }
    }
}
