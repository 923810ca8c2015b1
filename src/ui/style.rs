//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper falls
//! back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

type Painter = fn(&dyn Display) -> String;

const HEADER: Painter = |t| t.bold().to_string();
const LABEL: Painter = |t| t.blue().to_string();
const VALUE: Painter = |t| t.cyan().to_string();
const SECONDARY: Painter = |t| t.dimmed().to_string();
const SUCCESS: Painter = |t| t.green().to_string();
const ERROR: Painter = |t| t.red().bold().to_string();
const CODE: Painter = |t| t.yellow().to_string();
const HINT: Painter = |t| t.dimmed().italic().to_string();

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn paint<T: Display>(text: T, painter: Painter) -> String {
        paint_when(!output::is_no_color(), &text, painter)
    }

    /// Style for section headers (e.g., "Current defaults")
    pub fn header<T: Display>(text: T) -> String {
        Self::paint(text, HEADER)
    }

    /// Style for labels/keys (e.g., "from", "timeout")
    pub fn label<T: Display>(text: T) -> String {
        Self::paint(text, LABEL)
    }

    /// Style for primary values
    pub fn value<T: Display>(text: T) -> String {
        Self::paint(text, VALUE)
    }

    /// Style for secondary/supplementary info (e.g., paths, language names)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::paint(text, SECONDARY)
    }

    pub fn success<T: Display>(text: T) -> String {
        Self::paint(text, SUCCESS)
    }

    pub fn error<T: Display>(text: T) -> String {
        Self::paint(text, ERROR)
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        Self::paint(text, CODE)
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        Self::paint(text, HINT)
    }
}

fn paint_when(colored: bool, text: &dyn Display, painter: Painter) -> String {
    if colored {
        painter(text)
    } else {
        text.to_string()
    }
}
