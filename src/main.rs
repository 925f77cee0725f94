use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc;
use std::time::Instant;
use termfolio::app::Workbench;
use termfolio::kernel::content;
use termfolio::kernel::services::adapters::{
    get_settings_path, load_settings, startup_theme, AsyncRuntime, WeatherClient,
};
use termfolio::kernel::{AppState, Store};
#[cfg(unix)]
use termfolio::tui::terminal_guard::install_termination_signals;
use termfolio::tui::terminal_guard::TerminalGuard;
use termfolio::tui::{InputEvent, View};

mod logging;

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let settings = load_settings();
    let theme = startup_theme(&settings);
    tracing::info!(theme = theme.as_str(), "starting");

    let (msg_tx, msg_rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(msg_tx)?;
    let weather = WeatherClient::from_settings(&settings.weather);
    let store = Store::new(AppState::new(theme));
    let mut workbench = Workbench::new(store, runtime, weather, get_settings_path());

    let guard = TerminalGuard::new(content::TITLE)?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut exit_code = 0;
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            dirty = false;
        }

        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "exiting on signal");
            exit_code = signal.exit_code();
            break;
        }

        if event::poll(workbench.poll_interval())? {
            let event = InputEvent::from(event::read()?);
            let result = workbench.handle_input(&event);
            if result.is_quit() || workbench.should_quit() {
                break;
            }
            dirty = true;
        }

        while let Ok(msg) = msg_rx.try_recv() {
            dirty |= workbench.handle_message(msg);
        }
        dirty |= workbench.tick(Instant::now());
    }

    drop(terminal);
    drop(guard);
    tracing::info!("exited");

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
