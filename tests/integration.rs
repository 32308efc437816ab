// SPDX-License-Identifier: MPL-2.0
use iced_feedback::config::{self, Config};
use iced_feedback::lifecycle::{Category, Controller, Effect, Input, NotificationRequest, Phase, Position};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Controller with a close counter attached.
fn counted(request: NotificationRequest) -> (Controller, Arc<AtomicUsize>) {
    let closes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&closes);
    let controller = Controller::new(request).with_on_close(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (controller, closes)
}

/// Ticks every 10ms like the host window does, until `end`.
fn drive(controller: &mut Controller, from: Instant, end: Duration) -> usize {
    let mut closed = 0;
    let mut elapsed = Duration::ZERO;
    while elapsed <= end {
        if controller.tick(from + elapsed) == Effect::Closed {
            closed += 1;
        }
        elapsed += ms(10);
    }
    closed
}

#[test]
fn test_auto_dismiss_after_countdown() {
    let t0 = Instant::now();
    let (mut controller, closes) =
        counted(NotificationRequest::success("Changes saved successfully").with_duration_ms(5000));

    controller.set_open(true, t0);
    controller.tick(t0 + ms(1319));
    assert_eq!(controller.phase(), Phase::Expanded);
    controller.tick(t0 + ms(1320));
    assert_eq!(controller.phase(), Phase::Visible);

    controller.tick(t0 + ms(1320 + 2500));
    let progress = controller.progress();
    assert!((progress - 50.0).abs() < 1.0, "progress was {progress}");

    controller.tick(t0 + ms(1320 + 4999));
    assert_eq!(controller.phase(), Phase::Visible);
    controller.tick(t0 + ms(1320 + 5000));
    assert_eq!(controller.phase(), Phase::Collapsing);

    assert_eq!(controller.tick(t0 + ms(1320 + 5000 + 1100)), Effect::Closed);
    assert_eq!(controller.phase(), Phase::Hidden);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert_eq!(controller.pending_timers(), 0);
}

#[test]
fn test_close_during_entrance_runs_exit_sequence() {
    let t0 = Instant::now();
    let (mut controller, closes) = counted(NotificationRequest::info("New update available"));

    controller.set_open(true, t0);
    controller.tick(t0 + ms(5));
    controller.set_open(false, t0 + ms(5));
    assert_eq!(controller.phase(), Phase::Collapsing);
    assert!(!controller.has_countdown());

    controller.tick(t0 + ms(5 + 599));
    assert_eq!(controller.phase(), Phase::Collapsing);
    controller.tick(t0 + ms(5 + 600));
    assert_eq!(controller.phase(), Phase::CircleOut);
    assert_eq!(closes.load(Ordering::SeqCst), 0);

    controller.tick(t0 + ms(5 + 1100));
    assert_eq!(controller.phase(), Phase::Hidden);
    assert_eq!(closes.load(Ordering::SeqCst), 1);

    // Nothing from the abandoned entrance may fire afterwards.
    drive(&mut controller, t0, ms(8000));
    assert_eq!(controller.phase(), Phase::Hidden);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_escape_dismisses_once() {
    let t0 = Instant::now();
    let (mut controller, closes) = counted(NotificationRequest::warning("Storage is almost full"));

    controller.set_open(true, t0);
    controller.tick(t0 + ms(2000));
    assert_eq!(controller.phase(), Phase::Visible);

    assert!(controller.handle_input(Input::Escape, t0 + ms(2000)));
    assert_eq!(controller.phase(), Phase::Collapsing);
    assert!(!controller.handle_input(Input::Escape, t0 + ms(2100)));
    assert_eq!(controller.phase(), Phase::Collapsing);

    // The exit keeps its original schedule despite the second Escape.
    controller.tick(t0 + ms(2600));
    assert_eq!(controller.phase(), Phase::CircleOut);
    assert_eq!(controller.tick(t0 + ms(3100)), Effect::Closed);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_zero_duration_dismisses_immediately() {
    let t0 = Instant::now();
    let (mut controller, closes) =
        counted(NotificationRequest::error("Failed to connect to server").with_duration_ms(0));

    controller.set_open(true, t0);
    controller.tick(t0 + ms(1320));
    assert_eq!(controller.phase(), Phase::Collapsing);
    assert!(controller.progress().is_finite());

    drive(&mut controller, t0, ms(3000));
    assert!(controller.progress().is_finite());
    assert_eq!(controller.phase(), Phase::Hidden);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_negative_duration_behaves_like_zero() {
    let t0 = Instant::now();
    let mut controller = Controller::new(NotificationRequest::info("x").with_duration_ms(-250));

    controller.set_open(true, t0);
    controller.tick(t0 + ms(1320));
    assert_eq!(controller.phase(), Phase::Collapsing);
}

#[test]
fn test_progress_never_increases_within_a_run() {
    let t0 = Instant::now();
    let mut controller = Controller::new(NotificationRequest::info("x").with_duration_ms(2000));
    controller.set_open(true, t0);

    let mut last = controller.progress();
    for step in 0..400 {
        controller.tick(t0 + ms(step * 10));
        if controller.phase() == Phase::Hidden {
            break;
        }
        let progress = controller.progress();
        assert!(progress <= last, "progress rose from {last} to {progress}");
        assert!((0.0..=100.0).contains(&progress));
        last = progress;
    }
}

#[test]
fn test_repeated_open_is_idempotent() {
    let t0 = Instant::now();
    let mut controller = Controller::default();

    controller.set_open(true, t0);
    let generation = controller.generation();
    let pending = controller.pending_timers();

    controller.set_open(true, t0 + ms(10));
    assert_eq!(controller.generation(), generation);
    assert_eq!(controller.pending_timers(), pending);
    assert_eq!(controller.phase(), Phase::Mounted);
}

#[test]
fn test_rapid_toggling_leaves_one_run() {
    let t0 = Instant::now();
    let (mut controller, closes) = counted(NotificationRequest::info("x").with_duration_ms(3000));

    controller.set_open(true, t0);
    controller.set_open(false, t0);
    controller.set_open(true, t0);
    controller.set_open(false, t0 + ms(1));
    controller.set_open(true, t0 + ms(2));

    assert_eq!(controller.phase(), Phase::Mounted);
    assert_eq!(controller.pending_timers(), 1);

    controller.tick(t0 + ms(2 + 1320));
    assert_eq!(controller.phase(), Phase::Visible);
    // One progress sampler and one auto-dismiss deadline.
    assert_eq!(controller.pending_timers(), 2);

    let closed = drive(&mut controller, t0, ms(10_000));
    assert_eq!(closed, 1);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert_eq!(controller.pending_timers(), 0);
}

#[test]
fn test_reopen_after_close_starts_fresh() {
    let t0 = Instant::now();
    let (mut controller, closes) = counted(NotificationRequest::success("x").with_duration_ms(2000));

    controller.set_open(true, t0);
    drive(&mut controller, t0, ms(5000));
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert_eq!(controller.phase(), Phase::Hidden);
    assert!((controller.progress() - 100.0).abs() < f32::EPSILON);

    controller.set_open(false, t0 + ms(5000));
    controller.set_open(true, t0 + ms(5000));
    assert_eq!(controller.phase(), Phase::Mounted);
    drive(&mut controller, t0 + ms(5000), ms(5000));
    assert_eq!(closes.load(Ordering::SeqCst), 2);
}

#[test]
fn test_teardown_mid_animation_leaves_no_timers() {
    let t0 = Instant::now();
    let (mut controller, closes) = counted(NotificationRequest::info("x"));

    controller.set_open(true, t0);
    controller.tick(t0 + ms(1400));
    assert!(controller.pending_timers() > 0);

    controller.teardown();
    assert_eq!(controller.pending_timers(), 0);
    assert_eq!(controller.next_deadline(), None);
    assert!(!controller.is_active());

    drive(&mut controller, t0, ms(10_000));
    assert_eq!(closes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_frame_follows_content_changes() {
    let t0 = Instant::now();
    let mut controller = Controller::new(NotificationRequest::info("first"));
    controller.set_open(true, t0);
    controller.tick(t0 + ms(1320));

    controller.set_request(
        NotificationRequest::new(Category::Error, "second").with_position(Position::BottomLeft),
        t0 + ms(1400),
    );
    let frame = controller.frame();
    assert_eq!(frame.phase, Phase::Visible);
    assert_eq!(frame.message, "second");
    assert_eq!(frame.category, Category::Error);
    assert_eq!(frame.position, Position::BottomLeft);
    assert!(frame.show_content);
}

#[test]
fn test_notification_defaults_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut written = Config::default();
    written.notification.duration_ms = 8000;
    written.notification.position = Position::BottomRight;
    config::save_to_path(&written, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, written);

    let t0 = Instant::now();
    let request = NotificationRequest::info("x")
        .with_countdown(loaded.notification.countdown())
        .with_position(loaded.notification.position);
    let mut controller = Controller::new(request);
    controller.set_open(true, t0);
    controller.tick(t0 + ms(1320 + 7999));
    assert_eq!(controller.phase(), Phase::Visible);
    controller.tick(t0 + ms(1320 + 8000));
    assert_eq!(controller.phase(), Phase::Collapsing);
}

#[test]
fn test_unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[notification]\nduration_ms = \"soon\"\n")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn test_written_overrides_become_next_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let (mut effective, warning) = config::load_with_override(base.clone());
    assert!(warning.is_none());
    effective
        .notification
        .apply_overrides(Some(3000), Some(Position::TopLeft));
    config::save_with_override(&effective, base.clone()).expect("Failed to write config file");

    let (reloaded, warning) = config::load_with_override(base);
    assert!(warning.is_none());
    assert_eq!(reloaded.notification.duration_ms, 3000);
    assert_eq!(reloaded.notification.position, Position::TopLeft);
}
