use anyhow::Result;
use tracing::debug;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::translation::{TranslationRequest, Translator};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub text: String,
    pub file: Option<String>,
    pub timeout: Option<u64>,
}

/// Translates the given text and prints the result to stdout.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load()?;

    let resolve_options = ResolveOptions {
        from: options.from.clone(),
        to: options.to.clone(),
        timeout_secs: options.timeout,
    };
    let config = resolve_config(&resolve_options, &config_file)?;

    let text = resolve_text(&options)?;
    let request = TranslationRequest::new(
        text,
        config.source_language.clone(),
        config.target_language.clone(),
    );
    let translator = Translator::new(config);
    debug!(
        config = %manager.config_path().display(),
        endpoint = %translator.config().endpoint,
        timeout_secs = translator.config().timeout.as_secs(),
        "resolved configuration"
    );

    let spinner = Spinner::new("Translating...");
    let result = translator.translate(&request).await;
    spinner.stop();

    println!("{}", result?);
    Ok(())
}

/// Picks the text from `--file` when given, otherwise `--text`.
///
/// Trailing line breaks from files and piped input are dropped.
fn resolve_text(options: &TranslateOptions) -> Result<String> {
    match options.file.as_deref() {
        Some(path) => {
            let content = InputReader::read(path)?;
            Ok(content.trim_end_matches(['\r', '\n']).to_string())
        }
        None => Ok(options.text.clone()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn options(text: &str, file: Option<String>) -> TranslateOptions {
        TranslateOptions {
            from: None,
            to: None,
            text: text.to_string(),
            file,
            timeout: None,
        }
    }

    #[test]
    fn test_resolve_text_from_option() {
        assert_eq!(resolve_text(&options("hello", None)).unwrap(), "hello");
    }

    #[test]
    fn test_resolve_text_empty_by_default() {
        assert_eq!(resolve_text(&options("", None)).unwrap(), "");
    }

    #[test]
    fn test_resolve_text_from_file_drops_trailing_newlines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "line one\nline two\r\n\n").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let text = resolve_text(&options("", Some(path))).unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn test_resolve_text_missing_file() {
        let result = resolve_text(&options("", Some("/nonexistent/input.txt".to_string())));
        assert!(result.is_err());
    }
}
