use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trans")]
#[command(about = "CLI translator backed by the public Google Translate endpoint")]
#[command(version)]
pub struct Args {
    /// Suppress the spinner and status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honored via NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text from one language to another
    Translate {
        /// Source language code (default: en)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language code (default: ru)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Text to translate
        #[arg(
            short = 'x',
            long,
            default_value = "",
            hide_default_value = true,
            conflicts_with = "file"
        )]
        text: String,

        /// Read the text from a file, or from stdin when set to "-"
        #[arg(long)]
        file: Option<String>,

        /// Request timeout in seconds (default: 10)
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// List supported language codes
    Languages,
    /// Configure default languages and timeout
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
