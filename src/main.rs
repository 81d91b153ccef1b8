//! signup-page CLI
//!
//! Interactive registration page, plus non-interactive validation and
//! theme commands.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use signup_page::config::{load_config, PageConfig};
use signup_page::logging::{self, level_for_verbosity, LogTarget};
use signup_page::report::format_result;
use signup_page::storage::{default_store_path, JsonFileStore};
use signup_page::theme::ThemeState;
use signup_page::tui;
use signup_page::types::{FormInput, OutputFormat};
use signup_page::validate::validate;

#[derive(Parser)]
#[command(name = "signup-page")]
#[command(about = "Registration page with persisted theme and form validation")]
#[command(version)]
struct Cli {
    /// Page config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Preferences file (default: platform config dir)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Write logs to this file (the interactive page logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive registration page (default)
    Run,

    /// Validate registration fields and report errors (exit 1 if invalid)
    Validate {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        confirm_password: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Show or toggle the saved theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum ThemeCommand {
    /// Print the saved preference (default)
    Show,
    /// Flip between light and dark and save
    Toggle,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_logging(&cli).and_then(|()| dispatch(cli));

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<ExitCode, String> {
    let config = resolve_config(cli.config.as_deref())?;
    let store = JsonFileStore::new(resolve_store_path(cli.store, &config));

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&config, store),
        Commands::Validate {
            name,
            email,
            password,
            confirm_password,
            format,
        } => {
            let input = FormInput {
                name,
                email,
                password,
                confirm_password,
            };
            Ok(cmd_validate(&input, format.into()))
        }
        Commands::Theme { action } => cmd_theme(action.unwrap_or(ThemeCommand::Show), store),
    }
}

// ============================================================================
// SETUP
// ============================================================================

/// The interactive page owns the terminal, so it only logs to a file.
fn init_logging(cli: &Cli) -> Result<(), String> {
    let interactive = matches!(cli.command, None | Some(Commands::Run));
    let target = match (&cli.log_file, interactive) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => return Ok(()),
        (None, false) => LogTarget::Stderr,
    };
    logging::init(&target, level_for_verbosity(cli.verbose)).map_err(|e| e.to_string())
}

fn resolve_config(path: Option<&std::path::Path>) -> Result<PageConfig, String> {
    match path {
        Some(p) => load_config(p).map_err(|e| e.to_string()),
        None => Ok(PageConfig::default()),
    }
}

/// CLI flag, then config file, then platform default.
fn resolve_store_path(flag: Option<PathBuf>, config: &PageConfig) -> PathBuf {
    flag.or_else(|| config.store_path.clone())
        .unwrap_or_else(default_store_path)
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(config: &PageConfig, store: JsonFileStore) -> Result<ExitCode, String> {
    tui::run(config, store).map_err(|e| e.to_string())?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(input: &FormInput, format: OutputFormat) -> ExitCode {
    let result = validate(input);
    print!("{}", format_result(&result, format));

    if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_theme(action: ThemeCommand, store: JsonFileStore) -> Result<ExitCode, String> {
    let mut theme = ThemeState::load(store);

    match action {
        ThemeCommand::Show => {
            println!("{}", theme.current());
        }
        ThemeCommand::Toggle => {
            let pref = theme.toggle().map_err(|e| e.to_string())?;
            println!("{}", pref);
            eprintln!("Saved to {}", theme.store().path().display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
