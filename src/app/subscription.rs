// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval of the loading indicator animation.
pub const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Ticks the loading indicator while a page is in flight, and nothing
/// otherwise.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}
