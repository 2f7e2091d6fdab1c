//! Bounce Pong entry point
//!
//! Hosts the game in the terminal. Key events and timer expiries are dispatched
//! from one loop on one thread, so the game state needs no locking.

use std::io;
use std::panic;
use std::process;
use std::time::{Duration, Instant};

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use glam::Vec2;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use bounce_pong::platform::{SystemClock, TimerQueue};
use bounce_pong::render::TerminalSink;
use bounce_pong::{Command, Game, SimulationConfig};

/// Input poll timeout while no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

enum Action {
    Command(Command),
    Quit,
}

fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Command(Command::PaddleUp)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Command(Command::PaddleDown)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Command(Command::Select)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn load_config() -> SimulationConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SimulationConfig::default();
    };
    match SimulationConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bounce-pong: {}: {}", path, e);
            process::exit(1);
        }
    }
}

/// Raw mode and the alternate screen, held for the lifetime of the guard
///
/// Dropping the guard restores the terminal, so early returns and unwinding
/// panics leave the shell usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Dropped on the error path below, undoing raw mode
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leave raw mode and the alternate screen; safe to call more than once
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        log::warn!("Failed to leave alternate screen: {}", e);
    }
}

/// Restore the terminal before the default hook prints the panic message
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

fn main() -> io::Result<()> {
    env_logger::init();
    let config = load_config();
    log::info!("Bounce Pong starting...");

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let display = Vec2::new(config.screen_width, config.screen_height);
    let mut sink = TerminalSink::new(terminal, display);
    run(config, &mut sink)
}

fn run<B: Backend>(config: SimulationConfig, sink: &mut TerminalSink<B>) -> io::Result<()> {
    let clock = SystemClock;
    let mut timers = TimerQueue::new();
    let mut game = Game::new(config);
    game.start(&mut timers).map_err(io::Error::other)?;

    loop {
        let now = Instant::now();
        if let Some(handle) = timers.pop_due(now) {
            if let Err(e) = game.on_timer(handle, &clock, &mut timers, sink) {
                game.shutdown(&mut timers);
                return Err(io::Error::other(e));
            }
            continue;
        }

        let timeout = timers.time_until_next(now).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(Action::Command(command)) => {
                        game.handle_command(command, sink);
                    }
                    Some(Action::Quit) => break,
                    None => {}
                }
            }
        }
    }

    game.shutdown(&mut timers);
    timers.close();
    Ok(())
}
