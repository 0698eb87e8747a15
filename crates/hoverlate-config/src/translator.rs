use serde::{Deserialize, Serialize};

fn default_from_lang() -> String {
    "auto".to_string()
}

fn default_to_lang() -> String {
    "zh".to_string()
}

fn default_api_url() -> String {
    "http://api.fanyi.baidu.com/api/trans/vip/translate".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

/// Credentials and language pair, stored flat at the top of the config file
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    pub app_id: String,
    pub app_key: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub method: RequestMethod,
}

impl TranslatorConfig {
    pub fn has_credentials(&self) -> bool {
        !self.app_id.is_empty()
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: String::new(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_url: default_api_url(),
            method: RequestMethod::default(),
        }
    }
}
