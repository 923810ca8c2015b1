mod client;
mod error;
mod extract;
mod language;
mod transport;

pub use client::{
    DEFAULT_ENDPOINT, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT, TranslationRequest, Translator, TranslatorConfig,
};
pub use error::{BoxError, TranslateError};
pub use extract::extract_translation;
pub use language::{SUPPORTED_LANGUAGES, language_name, print_languages, supported_languages};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
