use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use prodtable::api::ProductClient;
use prodtable::controller::TableController;
use prodtable::model::Model;
use prodtable::view::ViewBuffer;

/// Product table browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/prodtable-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (h/l for pages, / for search)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Product API endpoint (overrides config)
    #[arg(short, long)]
    endpoint: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod config;
mod handlers;
mod services;
mod ui;
mod utils;

use config::Config;

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(
            file,
            "{} {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            msg
        );
    }
}

pub struct App {
    controller: TableController,

    /// Host surfaces the UI paints every frame
    view: ViewBuffer,

    api_tx: tokio::sync::mpsc::UnboundedSender<services::ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<services::ApiResponse>,

    endpoint: String,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let model = Model::new(config.table_model()?, config.vim_mode);
        let client = ProductClient::new(config.endpoint.clone());
        let (api_tx, api_rx) = services::api::spawn_api_service(client);

        Ok(Self {
            controller: TableController::new(model),
            view: ViewBuffer::new(),
            api_tx,
            api_rx,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Kick off the one product fetch; the loading indicator shows until it answers
    fn start_loading(&self) {
        self.send_request(services::ApiRequest::FetchProducts);
    }

    /// Queue a background request; the service drops repeats
    fn send_request(&self, request: services::ApiRequest) {
        if let Err(e) = self.api_tx.send(request) {
            log_debug(&format!("ERROR [API Service]: request not sent: {:?}", e.0));
        }
    }

    fn handle_api_response(&mut self, response: services::ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    fn handle_key(&mut self, key: event::KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match utils::get_config_path(args.config.clone())? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            Config::from_yaml(&text)?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    config.validate()?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Config errors are reported before the terminal is taken over
    let config = load_config(&args)?;

    let mut app = App::new(&config)?;
    app.start_loading();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render from the view buffer
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.controller.model().ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Short poll so fetch results repaint promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }
    }

    Ok(())
}
