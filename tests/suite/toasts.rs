//! Toasts as pushed and dismissed through the app.

use std::time::Duration;

use afterglow_engine::afterglow_types::{ToastError, ToastKind};

use crate::common::seeded_app;

#[test]
fn toasts_stack_in_arrival_order_without_dedup() {
    let mut app = seeded_app(2);
    app.push_toast("same", ToastKind::Info).unwrap();
    app.push_toast("same", ToastKind::Info).unwrap();
    app.push_toast("other", ToastKind::Error).unwrap();
    let messages: Vec<_> = app.toasts().toasts().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["same", "same", "other"]);
}

#[test]
fn default_duration_applies() {
    let mut app = seeded_app(2);
    app.push_toast("hello", ToastKind::Success).unwrap();
    app.tick(Duration::from_millis(2_999));
    assert_eq!(app.toasts().len(), 1);
    app.tick(Duration::from_millis(1));
    assert!(app.toasts().is_empty());
}

#[test]
fn dismiss_is_idempotent() {
    let mut app = seeded_app(2);
    let id = app.push_toast("hello", ToastKind::Success).unwrap();
    assert_eq!(app.dismiss_toast(id), Ok(true));
    assert_eq!(app.dismiss_toast(id), Ok(false));
}

#[test]
fn queue_is_unusable_after_shutdown() {
    let mut app = seeded_app(2);
    let id = app.push_toast("hello", ToastKind::Success).unwrap();
    app.shutdown();
    assert!(app.toasts().is_empty());
    assert_eq!(
        app.push_toast("late", ToastKind::Info),
        Err(ToastError::Inactive)
    );
    assert_eq!(app.dismiss_toast(id), Err(ToastError::Inactive));

    app.tick(Duration::from_secs(10));
    assert!(app.toasts().is_empty());
}
