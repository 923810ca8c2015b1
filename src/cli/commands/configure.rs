//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, Select};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::translation::{SUPPORTED_LANGUAGES, TranslatorConfig, language_name};
use crate::ui::{Style, handle_prompt_cancellation};

/// Prints the effective defaults and where they come from.
pub fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load()?;
    let resolved = resolve_config(&ResolveOptions::default(), &config_file)?;

    print_current_defaults(&resolved);

    let location = if manager.config_path().exists() {
        String::new()
    } else {
        format!(" {}", Style::hint("(not created yet)"))
    };
    println!(
        "{} {}{}",
        Style::label("config file"),
        Style::secondary(manager.config_path().display()),
        location
    );

    Ok(())
}

/// Interactively sets the default source language, target language and
/// timeout, then saves them. Endpoint and user agent are kept as they are.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation("Configuration unchanged.", run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load()?;
    let current = resolve_config(&ResolveOptions::default(), &config)?;

    print_current_defaults(&current);

    let from = select_language("Default source language:", &current.source_language)?;
    let to = select_language("Default target language:", &current.target_language)?;
    let timeout_secs = prompt_timeout(current.timeout.as_secs())?;

    config.trans.from = Some(from);
    config.trans.to = Some(to);
    config.trans.timeout_secs = Some(timeout_secs);
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &TranslatorConfig) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}      {}",
        Style::label("from"),
        describe_language(&config.source_language)
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        describe_language(&config.target_language)
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        Style::value(format!("{}s", config.timeout.as_secs()))
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

fn describe_language(code: &str) -> String {
    language_name(code).map_or_else(
        || Style::value(code),
        |name| format!("{} {}", Style::value(code), Style::secondary(format!("({name})"))),
    )
}

fn language_options() -> Vec<String> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect()
}

/// Extracts the code from a "code - Name" option.
fn option_code(option: &str) -> &str {
    option.split(" - ").next().unwrap_or(option)
}

fn select_language(prompt: &str, default: &str) -> Result<String> {
    let default_index = SUPPORTED_LANGUAGES
        .iter()
        .position(|(code, _)| *code == default)
        .unwrap_or(0);

    let selection = Select::new(prompt, language_options())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(option_code(&selection).to_string())
}

fn prompt_timeout(default: u64) -> Result<u64> {
    let timeout = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(default)
        .with_error_message("Please enter a whole number of seconds")
        .with_validator(validate_timeout)
        .prompt()?;

    Ok(timeout)
}

#[allow(clippy::unnecessary_wraps, clippy::trivially_copy_pass_by_ref)]
fn validate_timeout(value: &u64) -> Result<Validation, CustomUserError> {
    if *value == 0 {
        Ok(Validation::Invalid("Timeout must be at least 1 second".into()))
    } else {
        Ok(Validation::Valid)
    }
}
