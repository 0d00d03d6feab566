use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Mutex, time::Duration};
use tracing::{debug, info};

use webftp_tui::{config::Config, handlers, ui, utils, App, ViewMode};

/// Terminal client for a simple upload/list file server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server base URL (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Listing poll interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Start in plain list view instead of the table
    #[arg(long)]
    list: bool,

    /// Enable vim keybindings (jk, gg/G, /)
    #[arg(long)]
    vim: bool,

    /// Enable debug logging to the temp dir (webftp-tui-debug.log)
    #[arg(short, long)]
    debug: bool,
}

/// UI refresh / input poll period
const FRAME_POLL: Duration = Duration::from_millis(100);

fn init_logging() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::new("webftp_tui=debug"))
        .init();

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Apply results from background tasks (non-blocking)
        app.process_pending_responses();

        if event::poll(FRAME_POLL)? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        init_logging()?;
        debug!("Debug mode enabled");
    }

    let (mut config, config_path) = Config::load(args.config.as_deref())?;
    if let Some(path) = &config_path {
        info!("Loaded config from {}", path.display());
    }

    // Override config with CLI flags
    if let Some(url) = args.url {
        config.base_url = url;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.poll_interval_ms = interval_ms;
    }
    if args.list {
        config.view_mode = ViewMode::List;
    }
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.mount();

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    app.unmount();

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}
