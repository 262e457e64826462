//! Input handling for the Afterglow TUI.
//!
//! Terminal events are read on a blocking task and forwarded over a bounded
//! channel; the frame loop drains them between frames.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use afterglow_engine::App;
use afterglow_engine::afterglow_types::ToastKind;
use afterglow_engine::afterglow_types::ui::PointerSample;

use crate::surfaces::Surfaces;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    /// Start reading terminal events. Must be called inside a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into `app`. Returns whether the app asked to quit.
pub fn handle_events(
    app: &mut App,
    input: &mut InputPump,
    surfaces: &mut Surfaces,
) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        apply_event(app, surfaces, ev);
        processed += 1;
    }
    if processed == MAX_EVENTS_PER_FRAME {
        debug!(backlog = input.rx.len(), "input backlog deferred to next frame");
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Pointer and resize events update state for the
/// next frame; keys drive the demo.
pub fn apply_event(app: &mut App, surfaces: &mut Surfaces, event: Event) {
    match event {
        Event::Key(key) => apply_key(app, key),
        Event::Mouse(mouse) => {
            if matches!(
                mouse.kind,
                MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_)
            ) {
                app.set_pointer(PointerSample {
                    column: mouse.column,
                    row: mouse.row,
                });
            }
        }
        Event::Resize(width, height) => surfaces.resize(width, height),
        _ => {}
    }
}

fn apply_key(app: &mut App, key: KeyEvent) {
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    let toast = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return;
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.next_step();
            return;
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.prev_step();
            return;
        }
        KeyCode::Char('r') => {
            app.reset();
            return;
        }
        KeyCode::Char('g') => {
            app.toggle_glow();
            return;
        }
        KeyCode::Char('x') => {
            if let Err(e) = app.dismiss_newest_toast() {
                warn!("dismiss failed: {e}");
            }
            return;
        }
        KeyCode::Char('s') => (ToastKind::Success, "Summary saved"),
        KeyCode::Char('e') => (ToastKind::Error, "Summarization failed"),
        KeyCode::Char('i') => (ToastKind::Info, "Processing your document"),
        _ => return,
    };

    let (kind, message) = toast;
    if let Err(e) = app.push_toast(message, kind) {
        warn!("toast rejected: {e}");
    }
}
