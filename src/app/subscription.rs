// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions only exist while a notification is on screen or has
//! timers pending, so an idle window does no periodic work.

use super::message::{Message, Shortcut};
use crate::config::HOST_TICK_MS;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Drives the lifecycle controller's timers.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(HOST_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes Escape, Enter and Space to the notification.
pub fn create_keyboard_subscription(active: bool) -> Subscription<Message> {
    if !active {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => shortcut(&key),
        _ => None,
    })
}

/// Maps a pressed key to the shortcut it triggers.
pub fn shortcut(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::Shortcut(Shortcut::Escape)),
        keyboard::Key::Named(key::Named::Enter | key::Named::Space) => {
            Some(Message::Shortcut(Shortcut::Activate))
        }
        _ => None,
    }
}
