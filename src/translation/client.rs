use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

use super::error::TranslateError;
use super::extract::extract_translation;
use super::transport::{HttpRequest, ReqwestTransport, Transport};

/// Public endpoint of the translation service.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// The service rejects requests without a plausible browser user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";
pub const DEFAULT_TARGET_LANGUAGE: &str = "ru";

/// Client identifier expected by the public endpoint.
const CLIENT_ID: &str = "gtx";
/// `dt=t` selects the "translated text" output mode.
const OUTPUT_MODE: &str = "t";

/// Settings the translator runs with.
///
/// Built from the config file and CLI options by
/// [`resolve_config`](crate::config::resolve_config); `Default` gives the
/// built-in values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub user_agent: String,
    pub source_language: String,
    pub target_language: String,
}

impl Default for TranslatorConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            // expect is safe: DEFAULT_ENDPOINT is a compile-time constant
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Translates text with one GET request per call.
///
/// No retries: the first failure is returned to the caller.
pub struct Translator<T = ReqwestTransport> {
    transport: T,
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> Translator<T> {
    pub const fn with_transport(config: TranslatorConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub const fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Builds the outbound request: query parameters are form-encoded onto
    /// the endpoint in the order the service documents them.
    pub fn build_request(&self, request: &TranslationRequest) -> HttpRequest {
        let mut url = self.config.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", CLIENT_ID)
            .append_pair("sl", &request.source_language)
            .append_pair("tl", &request.target_language)
            .append_pair("dt", OUTPUT_MODE)
            .append_pair("q", &request.text);

        HttpRequest {
            url,
            headers: vec![
                ("User-Agent", self.config.user_agent.clone()),
                ("Accept", "*/*".to_string()),
            ],
            timeout: self.config.timeout,
        }
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        if request.text.is_empty() {
            return Err(TranslateError::InvalidInput);
        }

        let http_request = self.build_request(request);
        debug!(
            sl = %request.source_language,
            tl = %request.target_language,
            chars = request.text.chars().count(),
            "sending translation request"
        );

        let response = self
            .transport
            .send(&http_request)
            .await
            .map_err(|source| TranslateError::Network {
                url: http_request.url.to_string(),
                source,
            })?;

        debug!(status = response.status, bytes = response.body.len(), "received response");

        if response.status != 200 {
            return Err(TranslateError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        let parsed = match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => value,
            Err(source) => {
                return Err(TranslateError::Parse {
                    source,
                    body: response.body,
                });
            }
        };

        let translation = extract_translation(&parsed);
        if translation.is_empty() {
            return Err(TranslateError::Extraction {
                body: response.body,
            });
        }

        trace!(%translation, "extracted translation");
        Ok(translation)
    }
}
