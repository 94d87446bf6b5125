mod config;
mod history;
mod tui;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError, KNOWN_KEYS};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use history::HistoryTracker;
use log::info;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::fs::{self, OpenOptions};
use std::io;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "history-browser")]
#[command(about = "A TUI for browsing history with back/forward, undo/redo, bookmarks and search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (currently only 'start_page' is supported)")]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            init_logging();
            if let Err(e) = run_main_app() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for key in KNOWN_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

/// Routes `log` output to a file in the cache directory, since the TUI owns
/// the terminal. Logging stays off when that file can't be opened.
fn init_logging() {
    let Some(log_dir) = dirs::cache_dir().map(|dir| dir.join("history-browser")) else {
        return;
    };
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("history-browser.log"))
    else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn run_main_app() -> Result<()> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let mut app = App::new(HistoryTracker::new());
    if let Some(start_page) = config.start_page() {
        app.visit(start_page);
    }

    info!("starting history browser");
    run_tui(&mut app)?;
    info!("exiting, {} bookmarks discarded", app.tracker.bookmarks().len());

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
}
