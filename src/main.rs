use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use trans_cli::cli::commands::{configure, translate};
use trans_cli::cli::{Args, Command, exit_code};
use trans_cli::logging;
use trans_cli::output::{self, OutputConfig};
use trans_cli::translation::print_languages;
use trans_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("Error:"));
            ExitCode::from(u8::try_from(exit_code(&err)).unwrap_or(1))
        }
    }
}

async fn run(command: Option<Command>) -> Result<()> {
    match command {
        Some(Command::Translate {
            from,
            to,
            text,
            file,
            timeout,
        }) => {
            let options = translate::TranslateOptions {
                from,
                to,
                text,
                file,
                timeout,
            };
            translate::run_translate(options).await
        }
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        Some(Command::Configure { show }) => {
            if show {
                configure::show_config()
            } else {
                configure::run_configure()
            }
        }
        None => {
            println!("Welcome to the CLI Translator!");
            println!(
                "{}",
                Style::hint("Run 'trans translate --text <TEXT>' to translate, or 'trans --help'.")
            );
            Ok(())
        }
    }
}
