// SPDX-License-Identifier: MPL-2.0
//! Application root state for the feedback demo.
//!
//! The `App` plays the caller of the lifecycle controller: it owns the open
//! flag and the notification content, forwards input and ticks, and reacts
//! to the close report by clearing its open flag.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message, Shortcut};

use crate::config::REOPEN_DELAY_MS;
use crate::lifecycle::{Category, Controller, Countdown, Effect, Input, NotificationRequest, Position};
use crate::ui::feedback::ToastMessage;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    controller: Controller,
    position: Position,
    countdown: Countdown,
    theme_mode: ThemeMode,
    /// Enter/Space only dismiss while the pointer is over the toast.
    pointer_over_toast: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.controller.phase())
            .field("position", &self.position)
            .field("countdown", &self.countdown)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            controller: Controller::default(),
            position: Position::default(),
            countdown: Countdown::default(),
            theme_mode: ThemeMode::System,
            pointer_over_toast: false,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Demo text for each category.
#[must_use]
pub fn demo_message(category: Category) -> &'static str {
    match category {
        Category::Success => "Changes saved successfully",
        Category::Info => "New update available",
        Category::Warning => "Storage is almost full",
        Category::Error => "Failed to connect to server",
    }
}

impl App {
    /// Initializes application state from the launcher's flags.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut notification = flags.config.notification.clone();
        notification.apply_overrides(flags.duration_ms, flags.position);
        let mut app = App {
            position: notification.position,
            countdown: notification.countdown(),
            theme_mode: flags.config.general.theme_mode,
            ..Self::default()
        };

        if let Some(warning) = flags.config_warning {
            warn!(%warning, "using default settings");
            let request = app.request(Category::Warning, warning);
            let now = Instant::now();
            app.controller.set_request(request, now);
            app.controller.set_open(true, now);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Feedback Toast")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let active = self.controller.is_active();
        Subscription::batch([
            subscription::create_tick_subscription(active),
            subscription::create_keyboard_subscription(active),
        ])
    }

    /// Applies one message. Public so integration tests can drive the app.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        match message {
            Message::Show(category) => {
                // Close first, reopen with the new content shortly after.
                self.controller.set_open(false, now);
                self.pointer_over_toast = false;
                let request = self.request(category, demo_message(category));
                info!(%category, "notification requested");
                return Task::perform(
                    async move {
                        tokio::time::sleep(Duration::from_millis(REOPEN_DELAY_MS)).await;
                        request
                    },
                    Message::Reopen,
                );
            }
            Message::Reopen(request) => {
                // The new toast mounts off-screen, so no exit event follows.
                self.pointer_over_toast = false;
                self.controller.set_request(request, now);
                self.controller.set_open(true, now);
            }
            Message::PositionSelected(position) => {
                self.position = position;
                self.refresh_request(now);
            }
            Message::DurationSelected(countdown) => {
                self.countdown = countdown;
                self.refresh_request(now);
            }
            Message::Toast(ToastMessage::SurfaceClicked) => {
                self.controller.handle_input(Input::SurfaceClicked, now);
            }
            Message::Toast(ToastMessage::ClosePressed) => {
                self.controller.handle_input(Input::CloseButton, now);
            }
            Message::Toast(ToastMessage::Hovered(hovered)) => {
                self.pointer_over_toast = hovered;
            }
            Message::Shortcut(Shortcut::Escape) => {
                self.controller.handle_input(Input::Escape, now);
            }
            Message::Shortcut(Shortcut::Activate) => {
                if self.pointer_over_toast {
                    self.controller.handle_input(Input::ActivationKey, now);
                }
            }
            Message::Tick(instant) => {
                if self.controller.tick(instant) == Effect::Closed {
                    debug!("notification closed, clearing open flag");
                    self.pointer_over_toast = false;
                    self.controller.set_open(false, instant);
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            controller: &self.controller,
            position: self.position,
            countdown: self.countdown,
        })
    }

    /// Content for a new notification using the picked anchor and countdown.
    fn request(&self, category: Category, message: impl Into<String>) -> NotificationRequest {
        NotificationRequest::new(category, message)
            .with_countdown(self.countdown)
            .with_position(self.position)
    }

    /// Pushes picker changes into the current notification.
    fn refresh_request(&mut self, now: Instant) {
        let current = self.controller.request();
        let request = self.request(current.category(), current.message().to_string());
        self.controller.set_request(request, now);
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn countdown(&self) -> Countdown {
        self.countdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::lifecycle::Phase;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn open_with(app: &mut App, category: Category) -> Instant {
        let request = app.request(category, demo_message(category));
        let _ = app.update(Message::Reopen(request));
        Instant::now()
    }

    #[test]
    fn cli_overrides_take_precedence_over_config() {
        let flags = Flags {
            config: Config::default(),
            config_warning: None,
            duration_ms: Some(2000),
            position: Some(Position::BottomRight),
        };
        let (app, _) = App::new(flags);
        assert_eq!(app.countdown().as_millis(), 2000);
        assert_eq!(app.position(), Position::BottomRight);
        assert_eq!(app.controller().phase(), Phase::Hidden);
    }

    #[test]
    fn config_warning_opens_a_warning_toast() {
        let flags = Flags {
            config_warning: Some("bad settings".to_string()),
            ..Flags::default()
        };
        let (app, _) = App::new(flags);
        assert_eq!(app.controller().phase(), Phase::Mounted);
        assert_eq!(app.controller().request().category(), Category::Warning);
    }

    #[test]
    fn show_closes_before_reopening() {
        let mut app = App::default();
        open_with(&mut app, Category::Info);
        assert_eq!(app.controller().phase(), Phase::Mounted);

        let _ = app.update(Message::Show(Category::Error));
        assert_eq!(app.controller().phase(), Phase::Collapsing);
        assert!(!app.controller().is_open());
    }

    #[test]
    fn reopen_uses_picked_position_and_countdown() {
        let mut app = App::default();
        let _ = app.update(Message::PositionSelected(Position::BottomLeft));
        let _ = app.update(Message::DurationSelected(Countdown::from_millis(8000)));
        open_with(&mut app, Category::Success);

        let request = app.controller().request();
        assert_eq!(request.position(), Position::BottomLeft);
        assert_eq!(request.countdown().as_millis(), 8000);
        assert_eq!(request.message(), "Changes saved successfully");
    }

    #[test]
    fn escape_dismisses_open_toast() {
        let mut app = App::default();
        open_with(&mut app, Category::Info);
        let _ = app.update(Message::Shortcut(Shortcut::Escape));
        assert_eq!(app.controller().phase(), Phase::Collapsing);
    }

    #[test]
    fn activation_key_requires_pointer_over_toast() {
        let mut app = App::default();
        open_with(&mut app, Category::Info);

        let _ = app.update(Message::Shortcut(Shortcut::Activate));
        assert_eq!(app.controller().phase(), Phase::Mounted);

        let _ = app.update(Message::Toast(ToastMessage::Hovered(true)));
        let _ = app.update(Message::Shortcut(Shortcut::Activate));
        assert_eq!(app.controller().phase(), Phase::Collapsing);
    }

    #[test]
    fn hover_does_not_carry_over_to_the_next_toast() {
        let mut app = App::default();
        open_with(&mut app, Category::Info);
        let _ = app.update(Message::Toast(ToastMessage::Hovered(true)));

        let _ = app.update(Message::Show(Category::Success));
        let request = app.request(Category::Success, demo_message(Category::Success));
        let _ = app.update(Message::Reopen(request));
        assert_eq!(app.controller().phase(), Phase::Mounted);

        let _ = app.update(Message::Shortcut(Shortcut::Activate));
        assert_eq!(app.controller().phase(), Phase::Mounted);
    }

    #[test]
    fn close_report_clears_open_flag() {
        let mut app = App::default();
        let opened = open_with(&mut app, Category::Info);
        let _ = app.update(Message::Toast(ToastMessage::ClosePressed));

        let _ = app.update(Message::Tick(opened + ms(5_000)));
        assert_eq!(app.controller().phase(), Phase::Hidden);
        assert!(!app.controller().is_open());
        assert!(!app.controller().is_active());
    }

    #[test]
    fn duration_change_while_open_restarts() {
        let mut app = App::default();
        let opened = open_with(&mut app, Category::Info);
        let _ = app.update(Message::Tick(opened + ms(1_500)));
        assert_eq!(app.controller().phase(), Phase::Visible);

        let _ = app.update(Message::DurationSelected(Countdown::from_millis(3000)));
        assert_eq!(app.controller().phase(), Phase::Mounted);
    }

    #[test]
    fn demo_messages_match_categories() {
        assert_eq!(demo_message(Category::Warning), "Storage is almost full");
        assert_eq!(demo_message(Category::Error), "Failed to connect to server");
    }
}
