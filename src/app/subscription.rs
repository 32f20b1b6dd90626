// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events drive page navigation, window events keep the pager
//! informed of the available width, and a short tick runs while a scroll is
//! waiting to be snapped.

use super::Message;
use crate::ui::carousel;
use iced::keyboard::{self, key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Tick period while the pager is settling.
const SETTLE_TICK: Duration = Duration::from_millis(30);

/// Routes native window and keyboard events.
///
/// Keyboard events already captured by a widget are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            navigation_for_key(&key).map(Message::Carousel)
        }
        _ => None,
    })
}

/// Creates the snap tick, only while `settling` is true.
pub fn create_tick_subscription(settling: bool) -> Subscription<Message> {
    if settling {
        time::every(SETTLE_TICK).map(|now| Message::Carousel(carousel::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}

fn navigation_for_key(key: &keyboard::Key) -> Option<carousel::Message> {
    match key {
        keyboard::Key::Named(key::Named::ArrowRight) => Some(carousel::Message::NextPage),
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(carousel::Message::PreviousPage),
        keyboard::Key::Named(key::Named::Home) => Some(carousel::Message::FirstPage),
        keyboard::Key::Named(key::Named::End) => Some(carousel::Message::LastPage),
        _ => None,
    }
}
