//! # Naeilum CLI Entry Point
//!
//! Terminal client for the Naeilum name-suggestion and fortune service.
//!
//! ## Usage
//!
//! ```bash
//! # Connect to the configured server (default http://127.0.0.1:3000)
//! naeilum
//!
//! # Use another server and theme
//! naeilum --server http://localhost:3001 --theme nord
//!
//! # Probe the server's health endpoint and exit
//! naeilum --check
//! ```
//!
//! ## Flow
//!
//! 1. **Input**: enter first and last name, optionally open the options panel
//! 2. **Selection**: pick one of the suggested Korean names
//! 3. **Meaning**: read the family name and per-syllable meanings
//! 4. **Fortune**: draw today's fortune, as many times as you like
//!
//! ## Key Bindings
//!
//! ### Input
//! - `Tab` / `Shift+Tab` / `↑↓` - Move between fields
//! - `Space` - Toggle checkbox, cycle gender, open/close options
//! - `Ctrl+O` - Open/close the options panel
//! - `Enter` - Submit
//!
//! ### Selection
//! - `j` / `k` / `↑↓` - Move between cards
//! - `Space` - Select the highlighted card
//! - `Enter` / `c` - Confirm the selected card
//! - `p` - Preview (first card when nothing is selected)
//!
//! ### Meaning / Fortune
//! - `f` / `Enter` - Today's fortune
//! - `m` / `Enter` - Other fortunes
//!
//! ### Anywhere
//! - `r` - Restart
//! - `q` / `Ctrl+C` - Quit

use naeilum::api::{HttpApi, NaeilumApi};
use naeilum::logging;
use naeilum::session::{Controller, ControllerError, LoadingOverlay, Session};
use naeilum::ui::config::Config;
use naeilum::ui::theme::Theme;
use naeilum::ui::{self, Action, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::future::Future;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;

    /// Discard everything queued so far. Returns whether Ctrl+C was among it.
    fn drain(&mut self) -> Result<bool> {
        let mut interrupted = false;
        while let Some(event) = self.read_event(Duration::ZERO)? {
            interrupted |= is_interrupt(&event);
        }
        Ok(interrupted)
    }
}

fn is_interrupt(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key)
            if key.kind == KeyEventKind::Press
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c')
    )
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Naeilum - find your Korean name and today's fortune
#[derive(Parser, Debug)]
#[command(name = "naeilum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find your Korean name and today's fortune", long_about = None)]
struct Args {
    /// Base URL of the Naeilum server
    #[arg(short, long, value_name = "URL")]
    server: Option<String>,

    /// Color theme (see --list-themes)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Check that the server is reachable and exit
    #[arg(long)]
    check: bool,

    /// Print the built-in themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Store the effective server and theme in the config file
    #[arg(long)]
    save_config: bool,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    let config = Config::load().with_overrides(args.server, args.theme);
    let theme = Theme::by_name(&config.theme)
        .with_context(|| format!("Unknown theme: {} (try --list-themes)", config.theme))?
        .clone();

    if args.save_config {
        config.save().context("Failed to save config")?;
    }

    let log_dir = match args.log_dir {
        Some(dir) => Ok(dir),
        None => logging::default_log_dir(),
    };
    match log_dir.and_then(|dir| logging::init(&dir)) {
        Ok(path) => info!(log = %path.display(), server = %config.server_url, "starting naeilum"),
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    let api = Arc::new(HttpApi::new(config.server_url.clone()));

    if args.check {
        let health = api
            .health()
            .await
            .with_context(|| format!("Server at {} is not reachable", api.base_url()))?;
        println!(
            "{} is {} ({})",
            api.base_url(),
            health.status,
            health.timestamp.as_deref().unwrap_or("no timestamp")
        );
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(theme, config.server_url.clone());
    let mut controller = Controller::new(api);
    info!(session = %controller.session().session_id(), "session started");

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut controller, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app<B, A>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    controller: &mut Controller<A>,
    event_reader: &mut dyn EventReader,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    A: NaeilumApi + 'static,
{
    loop {
        terminal
            .draw(|f| ui::render(f, app, controller.session(), false))
            .context("Failed to draw terminal UI")?;

        let Some(event) = event_reader.read_event(POLL_TIMEOUT)? else {
            continue;
        };

        if let Event::Key(key) = event {
            let action = app.handle_key(key, controller.session());
            let network = action.is_network();
            perform(terminal, app, controller, event_reader, action).await?;
            // Keys pressed while waiting are dropped so they cannot trigger a
            // second overlapping request. Ctrl+C still quits.
            if network && event_reader.drain()? {
                app.should_quit = true;
            }
        }

        if app.should_quit {
            info!("quitting");
            return Ok(());
        }
    }
}

/// Apply one [`Action`] to the controller and record the outcome in the app.
async fn perform<B, A>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    controller: &mut Controller<A>,
    event_reader: &mut dyn EventReader,
    action: Action,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    A: NaeilumApi + 'static,
{
    let snapshot = controller.session().clone();
    let overlay = controller.loading().clone();

    let outcome = match action {
        Action::None => return Ok(()),
        Action::Quit => {
            app.should_quit = true;
            return Ok(());
        }
        Action::Submit(data) => {
            let call = controller.submit(data);
            wait_with_spinner(terminal, app, event_reader, &snapshot, &overlay, call).await?
        }
        Action::SelectCard(index) => Some(controller.select_card(index).map(|_| ())),
        Action::Preview => Some(controller.preview()),
        // The log task is detached; its failure only reaches the log file.
        Action::Confirm => Some(controller.confirm().map(|_| ())),
        Action::RequestFortune => {
            let call = async { controller.request_fortune().await.map(|_| ()) };
            wait_with_spinner(terminal, app, event_reader, &snapshot, &overlay, call).await?
        }
        Action::MoreFortunes => {
            let call = async { controller.more_fortunes().await.map(|_| ()) };
            wait_with_spinner(terminal, app, event_reader, &snapshot, &overlay, call).await?
        }
        Action::Restart => {
            controller.restart();
            app.restart();
            Some(Ok(()))
        }
    };

    let Some(outcome) = outcome else {
        app.should_quit = true;
        return Ok(());
    };

    if let Err(err) = &outcome {
        debug!(error = %err, "action did not complete");
    }
    app.apply_outcome(outcome);
    Ok(())
}

/// Drive `fut` to completion, redrawing the last screen with a spinner while
/// the loading overlay is visible.
///
/// Keys typed meanwhile are discarded. Ctrl+C abandons the call and yields
/// `None`; dropping the call hides the overlay.
async fn wait_with_spinner<B, F>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    snapshot: &Session,
    overlay: &LoadingOverlay,
    fut: F,
) -> Result<Option<Result<(), ControllerError>>>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    F: Future<Output = Result<(), ControllerError>>,
{
    tokio::pin!(fut);
    let mut ticker = tokio::time::interval(SPINNER_INTERVAL);
    let mut visibility = overlay.subscribe();

    loop {
        tokio::select! {
            outcome = &mut fut => return Ok(Some(outcome)),
            Ok(()) = visibility.changed() => {
                if *visibility.borrow_and_update() {
                    draw_loading(terminal, app, snapshot)?;
                }
            }
            _ = ticker.tick() => {
                if event_reader.drain()? {
                    info!("request abandoned by Ctrl+C");
                    return Ok(None);
                }
                if *visibility.borrow() {
                    app.spinner_tick = app.spinner_tick.wrapping_add(1);
                    draw_loading(terminal, app, snapshot)?;
                }
            }
        }
    }
}

fn draw_loading<B>(terminal: &mut Terminal<B>, app: &App, snapshot: &Session) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal
        .draw(|f| ui::render(f, app, snapshot, true))
        .context("Failed to draw terminal UI")?;
    Ok(())
}
