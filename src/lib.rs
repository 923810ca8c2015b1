//! # trans - command-line translator
//!
//! `trans` sends text to the public Google Translate endpoint
//! (`translate_a/single`, `client=gtx`) and prints the translation.
//!
//! ## Quick Start
//!
//! ```bash
//! # English to Russian (the defaults)
//! trans translate --text "hello"
//!
//! # Pick languages
//! trans translate -f ja -t en -x "こんにちは"
//!
//! # Translate a file, or stdin with "-"
//! trans translate --to de --file ./notes.txt
//! echo "good morning" | trans translate --file -
//!
//! # List language codes
//! trans languages
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use trans_cli::translation::{TranslationRequest, Translator, TranslatorConfig};
//!
//! # async fn demo() -> Result<(), trans_cli::translation::TranslateError> {
//! let translator = Translator::new(TranslatorConfig::default());
//! let text = translator
//!     .translate(&TranslationRequest::new("hello", "en", "ru"))
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/trans/config.toml`; every key is
//! optional and CLI options take precedence:
//!
//! ```toml
//! [trans]
//! from = "en"
//! to = "ru"
//! timeout_secs = 10
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Tracing subscriber setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client for the Google Translate endpoint.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
