use async_trait::async_trait;
use hoverlate_config::RequestMethod;
use hoverlate_config::translator::TranslatorConfig;
use md5::{Digest, Md5};
use rand::Rng;
use serde::Deserialize;

use crate::{TranslateError, Translation, Translator};

/// Non-empty error code the API uses to report success
pub const SUCCESS_CODE: &str = "52000";

#[derive(Clone)]
pub struct BaiduTranslator {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl BaiduTranslator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Translator for BaiduTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        if !self.config.has_credentials() {
            return Err(TranslateError::NotConfigured);
        }

        let salt = rand::thread_rng().gen_range(0..100_000).to_string();
        let sign = sign(&self.config.app_id, text, &salt, &self.config.app_key);

        let params = [
            ("q", text),
            ("from", self.config.from_lang.as_str()),
            ("to", self.config.to_lang.as_str()),
            ("appid", self.config.app_id.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
        ];

        let request = match self.config.method {
            RequestMethod::Get => self.client.get(&self.config.api_url).query(&params),
            RequestMethod::Post => self.client.post(&self.config.api_url).form(&params),
        };

        tracing::debug!(
            "Requesting translation {} -> {} ({} chars)",
            self.config.from_lang,
            self.config.to_lang,
            text.len()
        );
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::NetworkError(format!("HTTP {status}")));
        }

        let body = response.text().await?;
        let segments = parse_response(&body)?;

        Ok(Translation { segments })
    }

    fn name(&self) -> &str {
        "baidu"
    }
}

/// Lowercase hex MD5 over `app_id + text + salt + secret`
pub fn sign(app_id: &str, text: &str, salt: &str, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(app_id.as_bytes());
    hasher.update(text.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Deserialize)]
struct BaiduResponse {
    #[serde(default)]
    trans_result: Vec<TransResult>,
    #[serde(default)]
    error_code: Option<serde_json::Value>,
    #[serde(default)]
    error_msg: Option<String>,
}

#[derive(Deserialize)]
struct TransResult {
    #[allow(dead_code)]
    #[serde(default)]
    src: String,
    dst: String,
}

/// Extract translated segments from a reply body
pub fn parse_response(body: &str) -> Result<Vec<String>, TranslateError> {
    let response: BaiduResponse =
        serde_json::from_str(body).map_err(|e| TranslateError::ParseError(e.to_string()))?;

    let code = match response.error_code {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(code)) => code,
        Some(serde_json::Value::Number(code)) => code.to_string(),
        Some(other) => {
            return Err(TranslateError::ParseError(format!(
                "unexpected error_code {other}"
            )));
        }
    };

    if !code.is_empty() && code != SUCCESS_CODE {
        return Err(TranslateError::ApiError {
            code,
            message: response.error_msg.unwrap_or_default(),
        });
    }

    if response.trans_result.is_empty() {
        return Err(TranslateError::ParseError(
            "no translation in response".to_string(),
        ));
    }

    Ok(response
        .trans_result
        .into_iter()
        .map(|r| r.dst)
        .collect())
}
