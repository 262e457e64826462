//! Afterglow CLI - binary entry point and terminal session management.
//!
//! The binary bridges [`afterglow_engine`] (animation state) and
//! [`afterglow_tui`] (rendering) and doubles as the step driver for the
//! thinking sequence.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! Frames run at the configured cadence (16ms by default):
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`afterglow_tui::InputPump`])
//! 3. Advance animation state by the measured frame time (`app.tick()`)
//! 4. Render frame

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Stdout, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use afterglow_engine::{AfterglowConfig, App, Settings};
use afterglow_tui::{InputPump, Surfaces, draw, handle_events};

/// Where log lines go. `None` disables output entirely: stdout and stderr
/// belong to the TUI.
struct LogTarget {
    file: Option<(PathBuf, File)>,
    problems: Vec<String>,
}

impl LogTarget {
    /// First writable candidate: `~/.afterglow/logs/afterglow.log`, then
    /// `./.afterglow/logs/afterglow.log`.
    fn open() -> Self {
        let home = AfterglowConfig::path()
            .and_then(|config| config.parent().map(|dir| dir.join("logs")));
        let local = Some(PathBuf::from(".afterglow").join("logs"));

        let mut problems = Vec::new();
        let file = [home, local]
            .into_iter()
            .flatten()
            .map(|dir| dir.join("afterglow.log"))
            .find_map(|path| match open_append(&path) {
                Ok(file) => Some((path, file)),
                Err(e) => {
                    problems.push(format!("cannot log to {}: {e}", path.display()));
                    None
                }
            });
        Self { file, problems }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let LogTarget { file, problems } = LogTarget::open();

    let Some((path, file)) = file else {
        tracing_subscriber::registry().with(filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();
    tracing::info!(path = %path.display(), "logging initialized");
    for problem in problems {
        tracing::warn!("{problem}");
    }
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Holds raw mode, the alternate screen and mouse capture (pointer motion
/// drives the particle core and the cursor glow). All of it is restored on
/// drop, including after panics and early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::load();
    let mut surfaces = Surfaces::new(settings.device_pixel_ratio);
    let mut app = App::new(settings)?;

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app, &mut surfaces).await
    };

    app.shutdown();
    surfaces.release();

    if let Err(err) = &result {
        tracing::error!("exiting after error: {err:?}");
    }
    result
}

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    surfaces: &mut Surfaces,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(app.settings().frame);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input, surfaces) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        let delta = app.frame_elapsed();
        app.tick(delta);

        if let Err(e) = terminal.draw(|frame| draw(frame, app, surfaces)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
