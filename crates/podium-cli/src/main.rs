use anyhow::{Context, Result};
use clap::Parser;
use podium_core::Catalog;
use std::io::{self, Write};
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod menu;
mod render;

use config::Config;
use menu::Session;

#[derive(Debug, Parser)]
#[command(name = "podium", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the speaker data file (default: data/presentations.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Browse speakers interactively (the default)
    ///
    /// Shows a numbered menu and keeps serving choices until you pick Exit
    /// or close standard input:
    ///
    /// 1. List all speakers
    /// 2. List all themes/tags
    /// 3. Look a speaker up by name (partial names are fine)
    /// 4. Find speakers by theme or tag
    /// 5. Show a random motivational summary
    /// 6. Exit
    Menu,
    /// List every speaker with their talk title
    List,
    /// List every theme and tag, alphabetically
    Themes,
    /// Show one speaker by full or partial name
    Speaker {
        /// Name to look up (case-insensitive)
        name: String,
    },
    /// List speakers filed under a theme or tag
    Theme {
        /// Theme or tag to look up (case-insensitive, partial allowed)
        query: String,

        /// Also show one of the matching speakers at random
        #[arg(long)]
        reveal: bool,
    },
    /// Show a random motivational summary
    Random,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

/// Load and index the data file. Load problems are reported to the user and
/// end the run quietly; an empty collection is still returned.
fn load_catalog(config: &Config) -> Option<Catalog> {
    match Catalog::load(&config.data_path) {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            println!("[ERROR] {e}");
            log::debug!("Failed to load {}: {:?}", config.data_path.display(), e);
            None
        }
    }
}

/// Run `f` against the loaded catalog, or return quietly when the data file
/// could not be loaded.
fn with_catalog(config: &Config, f: impl FnOnce(&Catalog) -> Result<()>) -> Result<()> {
    match load_catalog(config) {
        Some(catalog) => f(&catalog),
        None => Ok(()),
    }
}

/// Say goodbye and exit cleanly on Ctrl-C while the menu is waiting.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let mut out = io::stdout();
        if let Err(e) = render::interrupted(&mut out).and_then(|()| out.flush()) {
            log::debug!("Failed to write farewell: {e}");
        }
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")
}

fn run_menu(catalog: &Catalog, wrap_width: usize) -> Result<()> {
    if catalog.is_empty() {
        log::warn!("No speakers to browse");
        return Ok(());
    }

    install_interrupt_handler()?;

    // Stdout is locked per write so the interrupt handler can always print.
    Session::new(catalog, io::stdin().lock(), io::stdout(), rand::rng())
        .with_wrap_width(wrap_width)
        .run()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_data_path(cli.data)?;
    logging::init(&config.logging, cli.verbose)?;

    let wrap_width = config.wrap_width;
    let mut out = io::stdout();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => with_catalog(&config, |catalog| run_menu(catalog, wrap_width))?,
        Commands::List => with_catalog(&config, |catalog| {
            commands::list_speakers(catalog, &mut out)
        })?,
        Commands::Themes => with_catalog(&config, |catalog| {
            commands::list_themes(catalog, &mut out)
        })?,
        Commands::Speaker { name } => with_catalog(&config, |catalog| {
            commands::show_speaker(catalog, &name, wrap_width, &mut out)
        })?,
        Commands::Theme { query, reveal } => with_catalog(&config, |catalog| {
            commands::show_theme(catalog, &query, reveal, wrap_width, &mut rand::rng(), &mut out)
        })?,
        Commands::Random => with_catalog(&config, |catalog| {
            commands::random_summary(catalog, wrap_width, &mut rand::rng(), &mut out)
        })?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&config)?,
            ConfigAction::Path => commands::show_path()?,
            ConfigAction::Example => commands::show_example()?,
            ConfigAction::Init => commands::init_config()?,
        },
    }

    out.flush()?;
    Ok(())
}
