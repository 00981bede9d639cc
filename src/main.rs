use anyhow::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture, EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};

use numpick::app::App;
use numpick::config::{CliArgs, Config};
use numpick::events::EventHandler;
use numpick::{log, tui};

/// Upper bound on how long the loop sleeps without a pending deadline.
const IDLE_TIMEOUT: Duration = Duration::from_millis(250);

/// Lower bound between ticks, so a zero repeat interval cannot spin.
const MIN_TICK: Duration = Duration::from_millis(1);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n{}", e, CliArgs::usage());
            std::process::exit(2);
        }
    };
    if cli.help {
        println!("{}", CliArgs::usage());
        return Ok(());
    }

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let config = Config::load(cli.config_path.clone()).with_overrides(&cli);
    log::log(&format!("Picker config: {:?}", config.picker));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    log::log(&format!("Exiting with value {}", app.picker.value()));
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        // Sleep until the picker needs a tick (long-press threshold or next
        // repeat), or the idle timeout
        let now = Instant::now();
        let wake = app
            .next_deadline()
            .map(|deadline| deadline.max(now + MIN_TICK))
            .unwrap_or(now + IDLE_TIMEOUT);

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.apply(action, Instant::now());
                    }
                    Some(Err(e)) => log::log(&format!("Event stream error: {}", e)),
                    None => return Ok(()),
                }
            }

            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(wake)) => {
                app.tick(Instant::now());
            }
        }
    }
}
