//! TUI snapshot tests using a vt100 virtual terminal.


use std::time::Duration;

use insta::assert_snapshot;
use ratatui::Terminal;

use afterglow_engine::afterglow_types::ToastKind;
use afterglow_engine::afterglow_types::ui::{PointerSample, UiOptions};
use afterglow_engine::{App, Settings, ToastQueue};
use afterglow_tui::{Palette, Surfaces, draw, draw_toasts, glyphs};

use vt100_backend::VirtualTerminal;

fn terminal(width: u16, height: u16) -> Terminal<VirtualTerminal> {
    Terminal::new(VirtualTerminal::new(width, height)).expect("failed to create terminal")
}

fn app(ui: UiOptions) -> App {
    App::new(Settings {
        seed: Some(5),
        ui,
        ..Settings::default()
    })
    .unwrap()
}

fn settled_queue(message: &str, kind: ToastKind) -> ToastQueue {
    let mut queue = ToastQueue::default();
    queue.activate();
    queue.push(message, kind).expect("queue is active");
    queue.advance(Duration::from_millis(500));
    queue
}

#[test]
fn snapshot_toast_card() {
    let queue = settled_queue("Saved", ToastKind::Success);
    let mut terminal = terminal(30, 3);
    terminal
        .draw(|frame| {
            let area = frame.area();
            draw_toasts(
                frame.buffer_mut(),
                area,
                &queue,
                &Palette::standard(),
                &glyphs(UiOptions::default()),
            );
        })
        .expect("failed to draw");

    assert_snapshot!("toast_card", terminal.backend().rendered());
}

#[test]
fn toast_card_colors_follow_kind() {
    let queue = settled_queue("Nope", ToastKind::Error);
    let mut terminal = terminal(30, 3);
    terminal
        .draw(|frame| {
            let area = frame.area();
            draw_toasts(
                frame.buffer_mut(),
                area,
                &queue,
                &Palette::standard(),
                &glyphs(UiOptions::default()),
            );
        })
        .expect("failed to draw");

    let screen = terminal.backend().screen();
    let icon = screen.cell(1, 7).expect("icon cell");
    assert_eq!(icon.contents(), "✗");
    assert!(icon.bold());
    assert_eq!(icon.fgcolor(), vt100::Color::Rgb(248, 113, 113));
    assert_eq!(icon.bgcolor(), vt100::Color::Rgb(127, 29, 29));
}

#[test]
fn full_frame_shows_the_thinking_panel() {
    let mut app = app(UiOptions::default());
    app.tick(Duration::from_secs(3));
    let mut surfaces = Surfaces::new(1.0);
    let mut terminal = terminal(100, 30);
    terminal
        .draw(|frame| draw(frame, &mut app, &mut surfaces))
        .expect("failed to draw");

    let screen = terminal.backend().rendered();
    assert!(screen.contains("Reading and analyzing your document..."));
    for label in ["Reading", "Analyzing", "Extracting Ideas", "Finalizing"] {
        assert!(screen.contains(label), "missing {label}");
    }
    assert!(screen.contains("q quit"));
    assert!(screen.contains('▀'));
}

#[test]
fn ascii_frame_after_stepping() {
    let mut app = app(UiOptions {
        ascii_only: true,
        reduced_motion: true,
        ..UiOptions::default()
    });
    assert!(app.next_step());
    assert!(app.next_step());
    app.tick(Duration::from_secs(3));
    app.push_toast("Copied", ToastKind::Info).expect("queue is active");
    app.tick(Duration::from_millis(300));

    let mut surfaces = Surfaces::new(1.0);
    let mut terminal = terminal(100, 30);
    terminal
        .draw(|frame| draw(frame, &mut app, &mut surfaces))
        .expect("failed to draw");

    let screen = terminal.backend().rendered();
    assert!(screen.contains("[x] Extracting core concepts..."));
    assert!(screen.contains("i Copied"));
    assert!(screen.contains("left/right step"));
    assert!(screen.contains('@'));
}

#[test]
fn resize_between_frames() {
    let mut app = app(UiOptions::default());
    app.set_pointer(PointerSample { column: 20, row: 10 });
    let mut surfaces = Surfaces::new(1.0);

    let mut small = terminal(40, 12);
    small
        .draw(|frame| draw(frame, &mut app, &mut surfaces))
        .expect("failed to draw");

    surfaces.resize(100, 30);
    app.tick(Duration::from_millis(16));
    let mut large = terminal(100, 30);
    large
        .draw(|frame| draw(frame, &mut app, &mut surfaces))
        .expect("failed to draw");
    assert!(large.backend().rendered().contains("Finalizing"));
}
