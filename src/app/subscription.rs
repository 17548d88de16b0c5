// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are reduced to the few shapes the viewer understands.
//! Pointer and touch input is always routed so the cursor position is known
//! when a press starts a drag. Keyboard input is only routed while the viewer
//! overlay asks for it.

use super::Message;
use crate::viewer::gesture::{self, DragSource};
use iced::{event, keyboard, mouse, touch, Point, Subscription};
use std::time::Instant;

/// Pointer and touch input, stripped down to what drag tracking needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    CursorMoved(Point),
    Pressed,
    Released,
    CursorLeft,
    FingerPressed(Point),
    FingerMoved(Point),
    FingerLifted,
    FingerLost,
}

/// Routes pointer and touch events, tagged with their window.
///
/// Presses are routed even when a widget captured them: a click on a button
/// starts a drag that never travels far enough to count as a swipe.
pub fn create_pointer_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        pointer_event(&event).map(|event| Message::Pointer {
            window: window_id,
            event,
        })
    })
}

/// Routes key presses while `listening` is set.
pub fn create_keyboard_subscription(listening: bool) -> Subscription<Message> {
    if !listening {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(key)),
        _ => None,
    })
}

fn pointer_event(event: &event::Event) -> Option<PointerEvent> {
    match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(PointerEvent::CursorMoved(*position))
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(PointerEvent::Pressed)
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(PointerEvent::Released)
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(PointerEvent::CursorLeft),
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerEvent::FingerPressed(*position))
        }
        event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(PointerEvent::FingerMoved(*position))
        }
        event::Event::Touch(touch::Event::FingerLifted { .. }) => Some(PointerEvent::FingerLifted),
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(PointerEvent::FingerLost),
        _ => None,
    }
}

/// Translates pointer input into a gesture message.
///
/// `cursor` is the last known pointer position; a mouse press carries none.
pub fn gesture_message(
    event: PointerEvent,
    cursor: Option<Point>,
    now: Instant,
) -> Option<gesture::Message> {
    match event {
        PointerEvent::CursorMoved(position) => Some(gesture::Message::Move {
            source: DragSource::Pointer,
            position,
        }),
        PointerEvent::Pressed => cursor.map(|position| gesture::Message::Start {
            source: DragSource::Pointer,
            position,
            at: now,
        }),
        PointerEvent::Released => Some(gesture::Message::End {
            source: DragSource::Pointer,
            at: now,
        }),
        PointerEvent::FingerPressed(position) => Some(gesture::Message::Start {
            source: DragSource::Touch,
            position,
            at: now,
        }),
        PointerEvent::FingerMoved(position) => Some(gesture::Message::Move {
            source: DragSource::Touch,
            position,
        }),
        PointerEvent::FingerLifted => Some(gesture::Message::End {
            source: DragSource::Touch,
            at: now,
        }),
        PointerEvent::CursorLeft | PointerEvent::FingerLost => Some(gesture::Message::Cancel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_press_starts_at_last_cursor_position() {
        let now = Instant::now();
        let cursor = Point::new(12.0, 34.0);
        match gesture_message(PointerEvent::Pressed, Some(cursor), now) {
            Some(gesture::Message::Start {
                source, position, ..
            }) => {
                assert_eq!(source, DragSource::Pointer);
                assert_eq!(position, cursor);
            }
            other => panic!("expected Start, got {other:?}"),
        }
    }

    #[test]
    fn mouse_press_without_cursor_is_dropped() {
        assert!(gesture_message(PointerEvent::Pressed, None, Instant::now()).is_none());
    }

    #[test]
    fn touch_events_use_touch_source() {
        let now = Instant::now();
        assert!(matches!(
            gesture_message(PointerEvent::FingerPressed(Point::ORIGIN), None, now),
            Some(gesture::Message::Start {
                source: DragSource::Touch,
                ..
            })
        ));
        assert!(matches!(
            gesture_message(PointerEvent::FingerLifted, None, now),
            Some(gesture::Message::End {
                source: DragSource::Touch,
                ..
            })
        ));
    }

    #[test]
    fn losing_the_pointer_cancels() {
        let now = Instant::now();
        assert!(matches!(
            gesture_message(PointerEvent::CursorLeft, None, now),
            Some(gesture::Message::Cancel)
        ));
        assert!(matches!(
            gesture_message(PointerEvent::FingerLost, None, now),
            Some(gesture::Message::Cancel)
        ));
    }

    #[test]
    fn right_button_is_not_a_pointer_event() {
        let event = event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert!(pointer_event(&event).is_none());
    }
}
