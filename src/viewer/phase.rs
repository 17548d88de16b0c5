// SPDX-License-Identifier: MPL-2.0
//! Viewer phase state machine.
//!
//! ```text
//! Closed ──Open──▶ GlobalLoading ──AssetLoaded──▶ ImageLoaded
//!                        ▲                          │    ▲
//!           EnterGlobalLoading / SwipeNavigate   Navigate │
//!                        │                          ▼    │
//!                        └──────────────────── ImageLoading
//! ```
//!
//! `Close` leads back to `Closed` from every phase.
//!
//! Each load expectation is tagged with the identity it was issued for.
//! A completion signal is honored only while that identity is still the
//! awaited one; anything else is a stale signal and is dropped.

use super::navigation::{self, Direction};
use crate::domain::gallery::{ImageId, OrderedCollection};

/// Lifecycle stage of the viewer overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerPhase {
    /// Overlay closed. Initial state, and the state every close returns to.
    #[default]
    Closed,
    /// Overlay open but no image has settled yet (full-area spinner).
    GlobalLoading,
    /// An image is selected but its asset has not finished loading.
    ImageLoading,
    /// Asset ready and visible.
    ImageLoaded,
}

impl ViewerPhase {
    #[must_use]
    pub fn is_open(self) -> bool {
        self != ViewerPhase::Closed
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, ViewerPhase::GlobalLoading | ViewerPhase::ImageLoading)
    }
}

/// Phase tracker owned by the viewer orchestrator.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: ViewerPhase,
    /// Last identity supplied by the host as "current image".
    current: Option<ImageId>,
    /// Identity the next load completion must carry to be honored.
    awaiting: Option<ImageId>,
}

/// Messages for the phase state machine.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the overlay.
    Open,
    /// The host supplied a new current image.
    TargetChanged(ImageId),
    /// The asset of `ImageId` finished loading.
    AssetLoaded(ImageId),
    /// Step one image in the given direction (buttons, keyboard).
    Navigate(Direction),
    /// Step one image after a confirmed swipe, showing the global spinner.
    SwipeNavigate(Direction),
    /// Force the full-area spinner and forget pending load tracking.
    EnterGlobalLoading,
    /// Hide the overlay.
    Close,
}

/// Effects produced by phase transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The awaited image settled; notify the background side channel.
    Settled(ImageId),
    /// Ask the collection provider to move its cursor.
    RequestMove(Direction),
    /// The overlay closed; notify the host.
    Closed,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a phase message against the current collection snapshot.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, collection: &OrderedCollection) -> Effect {
        match msg {
            Message::Open => {
                if self.phase == ViewerPhase::Closed {
                    self.awaiting = None;
                    self.transition(ViewerPhase::GlobalLoading);
                }
                Effect::None
            }
            Message::TargetChanged(id) => {
                self.retarget(id);
                Effect::None
            }
            Message::AssetLoaded(id) => self.asset_loaded(id),
            Message::Navigate(direction) => {
                if !self.permits(direction, collection) {
                    log::trace!("navigation {direction:?} rejected in {:?}", self.phase);
                    return Effect::None;
                }
                self.awaiting = None;
                self.transition(ViewerPhase::ImageLoading);
                Effect::RequestMove(direction)
            }
            Message::SwipeNavigate(direction) => {
                // Permission is checked against the pre-swipe snapshot.
                if !self.permits(direction, collection) {
                    log::trace!("swipe {direction:?} rejected in {:?}", self.phase);
                    return Effect::None;
                }
                self.enter_global_loading();
                Effect::RequestMove(direction)
            }
            Message::EnterGlobalLoading => {
                self.enter_global_loading();
                Effect::None
            }
            Message::Close => {
                self.awaiting = None;
                if self.phase == ViewerPhase::Closed {
                    return Effect::None;
                }
                self.transition(ViewerPhase::Closed);
                Effect::Closed
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    /// Identity of the image the host last supplied.
    #[must_use]
    pub fn current(&self) -> Option<&ImageId> {
        self.current.as_ref()
    }

    /// Identity whose load completion is currently expected.
    #[must_use]
    pub fn awaiting(&self) -> Option<&ImageId> {
        self.awaiting.as_ref()
    }

    fn permits(&self, direction: Direction, collection: &OrderedCollection) -> bool {
        navigation::can_go(direction, self.current.as_ref(), collection, self.phase)
    }

    fn retarget(&mut self, id: ImageId) {
        let unchanged = self.current.as_ref() == Some(&id);
        self.current = Some(id.clone());

        match self.phase {
            ViewerPhase::Closed => {}
            ViewerPhase::GlobalLoading => self.awaiting = Some(id),
            ViewerPhase::ImageLoaded if unchanged => {}
            ViewerPhase::ImageLoading | ViewerPhase::ImageLoaded => {
                self.awaiting = Some(id);
                self.transition(ViewerPhase::ImageLoading);
            }
        }
    }

    fn asset_loaded(&mut self, id: ImageId) -> Effect {
        let expected = self.phase.is_loading() && self.awaiting.as_ref() == Some(&id);
        if !expected {
            log::trace!("discarding stale load signal for {id}");
            return Effect::None;
        }
        self.awaiting = None;
        self.transition(ViewerPhase::ImageLoaded);
        Effect::Settled(id)
    }

    fn enter_global_loading(&mut self) {
        if self.phase == ViewerPhase::Closed {
            return;
        }
        self.awaiting = None;
        self.transition(ViewerPhase::GlobalLoading);
    }

    fn transition(&mut self, to: ViewerPhase) {
        if self.phase != to {
            log::debug!("viewer phase {:?} -> {:?}", self.phase, to);
        }
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageRecord;

    fn abc() -> OrderedCollection {
        OrderedCollection::new(vec![
            ImageRecord::new("a", "A", "a.png", ""),
            ImageRecord::new("b", "B", "b.png", ""),
            ImageRecord::new("c", "C", "c.png", ""),
        ])
        .unwrap()
    }

    fn id(key: &str) -> ImageId {
        ImageId::new(key)
    }

    fn loaded_at(key: &str, collection: &OrderedCollection) -> State {
        let mut state = State::new();
        state.handle(Message::Open, collection);
        state.handle(Message::TargetChanged(id(key)), collection);
        let effect = state.handle(Message::AssetLoaded(id(key)), collection);
        assert_eq!(effect, Effect::Settled(id(key)));
        state
    }

    #[test]
    fn starts_closed() {
        let state = State::new();
        assert_eq!(state.phase(), ViewerPhase::Closed);
        assert!(state.current().is_none());
    }

    #[test]
    fn open_enters_global_loading() {
        let collection = abc();
        let mut state = State::new();
        let effect = state.handle(Message::Open, &collection);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), ViewerPhase::GlobalLoading);
    }

    #[test]
    fn first_load_settles_from_global_loading() {
        let collection = abc();
        let state = loaded_at("a", &collection);
        assert_eq!(state.phase(), ViewerPhase::ImageLoaded);
        assert!(state.awaiting().is_none());
    }

    #[test]
    fn close_twice_is_idempotent() {
        let collection = abc();
        let mut state = loaded_at("a", &collection);

        assert_eq!(state.handle(Message::Close, &collection), Effect::Closed);
        assert_eq!(state.handle(Message::Close, &collection), Effect::None);
        assert_eq!(state.phase(), ViewerPhase::Closed);
    }

    #[test]
    fn close_from_closed_stays_closed() {
        let collection = abc();
        let mut state = State::new();
        state.handle(Message::Close, &collection);
        state.handle(Message::Close, &collection);
        assert_eq!(state.phase(), ViewerPhase::Closed);
    }

    #[test]
    fn navigate_next_requests_move_and_marks_loading() {
        let collection = abc();
        let mut state = loaded_at("a", &collection);

        let effect = state.handle(Message::Navigate(Direction::Next), &collection);
        assert_eq!(effect, Effect::RequestMove(Direction::Next));
        assert_eq!(state.phase(), ViewerPhase::ImageLoading);

        state.handle(Message::TargetChanged(id("b")), &collection);
        let effect = state.handle(Message::AssetLoaded(id("b")), &collection);
        assert_eq!(effect, Effect::Settled(id("b")));
        assert_eq!(state.phase(), ViewerPhase::ImageLoaded);
    }

    #[test]
    fn navigate_at_boundary_is_silent_noop() {
        let collection = abc();
        let mut state = loaded_at("a", &collection);

        let effect = state.handle(Message::Navigate(Direction::Previous), &collection);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), ViewerPhase::ImageLoaded);
    }

    #[test]
    fn navigate_while_loading_is_rejected() {
        let collection = abc();
        let mut state = State::new();
        state.handle(Message::Open, &collection);
        state.handle(Message::TargetChanged(id("b")), &collection);

        let effect = state.handle(Message::Navigate(Direction::Next), &collection);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), ViewerPhase::GlobalLoading);
    }

    #[test]
    fn late_signal_after_navigation_is_discarded() {
        let collection = abc();
        let mut state = loaded_at("a", &collection);
        state.handle(Message::Navigate(Direction::Next), &collection);

        let effect = state.handle(Message::AssetLoaded(id("a")), &collection);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), ViewerPhase::ImageLoading);
    }

    #[test]
    fn signal_for_replaced_target_is_discarded() {
        let collection = abc();
        let mut state = State::new();
        state.handle(Message::Open, &collection);
        state.handle(Message::TargetChanged(id("a")), &collection);
        state.handle(Message::TargetChanged(id("b")), &collection);

        assert_eq!(
            state.handle(Message::AssetLoaded(id("a")), &collection),
            Effect::None
        );
        assert_eq!(state.phase(), ViewerPhase::GlobalLoading);
        assert_eq!(
            state.handle(Message::AssetLoaded(id("b")), &collection),
            Effect::Settled(id("b"))
        );
    }

    #[test]
    fn signal_while_closed_is_discarded() {
        let collection = abc();
        let mut state = State::new();
        state.handle(Message::TargetChanged(id("a")), &collection);

        assert_eq!(
            state.handle(Message::AssetLoaded(id("a")), &collection),
            Effect::None
        );
        assert_eq!(state.phase(), ViewerPhase::Closed);
    }

    #[test]
    fn swipe_navigate_shows_global_spinner() {
        let collection = abc();
        let mut state = loaded_at("b", &collection);

        let effect = state.handle(Message::SwipeNavigate(Direction::Previous), &collection);
        assert_eq!(effect, Effect::RequestMove(Direction::Previous));
        assert_eq!(state.phase(), ViewerPhase::GlobalLoading);

        state.handle(Message::TargetChanged(id("a")), &collection);
        assert_eq!(state.phase(), ViewerPhase::GlobalLoading);
        assert_eq!(
            state.handle(Message::AssetLoaded(id("a")), &collection),
            Effect::Settled(id("a"))
        );
    }

    #[test]
    fn enter_global_loading_drops_pending_expectation() {
        let collection = abc();
        let mut state = loaded_at("a", &collection);
        state.handle(Message::TargetChanged(id("b")), &collection);
        assert_eq!(state.awaiting(), Some(&id("b")));

        state.handle(Message::EnterGlobalLoading, &collection);
        assert_eq!(state.phase(), ViewerPhase::GlobalLoading);
        assert!(state.awaiting().is_none());
        assert_eq!(
            state.handle(Message::AssetLoaded(id("b")), &collection),
            Effect::None
        );
    }

    #[test]
    fn enter_global_loading_does_not_open_a_closed_viewer() {
        let collection = abc();
        let mut state = State::new();
        state.handle(Message::EnterGlobalLoading, &collection);
        assert_eq!(state.phase(), ViewerPhase::Closed);
    }

    #[test]
    fn same_target_while_loaded_keeps_image_loaded() {
        let collection = abc();
        let mut state = loaded_at("a", &collection);
        state.handle(Message::TargetChanged(id("a")), &collection);
        assert_eq!(state.phase(), ViewerPhase::ImageLoaded);
    }

    #[test]
    fn machine_can_be_reopened() {
        let collection = abc();
        let mut state = loaded_at("c", &collection);
        state.handle(Message::Close, &collection);
        state.handle(Message::Open, &collection);
        assert_eq!(state.phase(), ViewerPhase::GlobalLoading);
        assert!(state.awaiting().is_none());
    }
}
