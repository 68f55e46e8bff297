//! Command line front end: query a translation directory.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use locale_translator::config::{
    self,
    ConfigError,
    TranslatorSettings,
    ValidationError,
};
use locale_translator::{
    FileTranslator,
    Translator,
    TranslatorError,
};
use tracing_subscriber::EnvFilter;

/// Resolve and translate messages from a directory of JSON translation files.
#[derive(Debug, Parser)]
#[command(name = "locale-translator", version)]
struct Cli {
    /// Settings file. Defaults to `./.translator.json` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Translation directory; overrides `translationDir`.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Fallback locale; overrides `fallbackLocale`.
    #[arg(long, global = true)]
    fallback: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Queries against the loaded translations.
#[derive(Debug, Subcommand)]
enum Command {
    /// Print the message for a key, with fallback.
    Resolve {
        /// Requested locale
        locale: String,
        /// Translation key
        key: String,
    },
    /// Print the message for a key with placeholders substituted.
    Translate {
        /// Requested locale
        locale: String,
        /// Translation key
        key: String,
        /// Placeholder values as NAME=VALUE
        #[arg(value_parser = parse_placeholder)]
        placeholders: Vec<(String, String)>,
    },
    /// List the keys available in a locale (the default scope when omitted).
    Keys {
        /// Locale to list
        #[arg(default_value = "")]
        locale: String,
    },
    /// Print the aggregated document as JSON.
    Dump,
}

/// Parses a `NAME=VALUE` placeholder argument.
fn parse_placeholder(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))
}

/// Reads the settings file and applies command line overrides.
fn load_settings(cli: &Cli) -> Result<TranslatorSettings, ConfigError> {
    let mut settings = match &cli.config {
        Some(path) => config::load_from_file(path)?,
        None => config::load_from_workspace(Path::new("."))?.unwrap_or_default(),
    };

    if let Some(dir) = &cli.dir {
        settings.translation_dir = Some(dir.clone());
    }
    if let Some(fallback) = &cli.fallback {
        settings.fallback_locale.clone_from(fallback);
    }

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    Ok(settings)
}

/// Loads the translations and runs one subcommand against them.
#[allow(clippy::print_stdout)]
fn run(cli: Cli) -> Result<(), TranslatorError> {
    let settings = load_settings(&cli)?;
    let Some(dir) = &settings.translation_dir else {
        return Err(ConfigError::ValidationErrors(vec![ValidationError::new(
            "translationDir",
            "A translation directory is required. Pass --dir or set \"translationDir\"",
        )])
        .into());
    };

    let translator = FileTranslator::with_settings(dir.clone(), &settings)?;

    match cli.command {
        Command::Resolve { locale, key } => {
            println!("{}", translator.resolve(&locale, &key));
        }
        Command::Translate { locale, key, placeholders } => {
            let placeholders: HashMap<String, String> = placeholders.into_iter().collect();
            println!("{}", translator.translate(&locale, &key, &placeholders));
        }
        Command::Keys { locale } => {
            for key in translator.keys(&locale) {
                println!("{key}");
            }
        }
        Command::Dump => {
            println!("{}", translator.document_text());
        }
    }

    Ok(())
}

/// エントリーポイント
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
