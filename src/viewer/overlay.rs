// SPDX-License-Identifier: MPL-2.0
//! Viewer overlay orchestrator.
//!
//! Owns the phase machine, the gesture tracker and the fullscreen controller,
//! plus the visibility flag and the snapshot of the collection the host
//! supplied. The host feeds it one [`Message`] at a time and executes the
//! returned [`Effect`].

use super::fullscreen::{
    CloseDecision, FullscreenController, FullscreenPlatform, FullscreenRequest, SyncOutcome,
};
use super::gesture::{self, GestureConfig, GestureState};
use super::keyboard::{self, KeyAction, KeyboardSnapshot, ViewerKey};
use super::navigation::{Direction, NavigationFlags};
use super::phase::{self, ViewerPhase};
use crate::domain::gallery::{ImageId, ImageRecord, OrderedCollection};

/// Which loading indicator the overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spinner {
    Hidden,
    /// Small spinner over the previous image while the next one loads.
    Image,
    /// Full-area spinner; no image is shown.
    Global,
}

#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    phase: phase::State,
    gesture: gesture::State,
    fullscreen: FullscreenController,
    collection: OrderedCollection,
    current: Option<ImageRecord>,
}

/// Messages accepted by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the overlay on `ImageRecord`.
    Open(ImageRecord),
    /// Programmatic close request from the host.
    Close,
    /// Click on the dimmed area around the image.
    BackdropClicked,
    /// "Close" button.
    CloseButton,
    /// The provider published a new collection snapshot.
    CollectionChanged(OrderedCollection),
    /// The provider moved its cursor to a new current image.
    CurrentChanged(ImageRecord),
    /// The asset loader finished loading `ImageId`.
    AssetLoaded(ImageId),
    /// "Previous" button.
    Previous,
    /// "Next" button.
    Next,
    /// A bound key was pressed.
    Key(ViewerKey),
    /// Drag input from pointer or touch.
    Gesture(gesture::Message),
    /// Fullscreen button.
    ToggleFullscreen,
    /// Exit-fullscreen button. Never closes the overlay.
    ExitFullscreen,
    /// Platform fullscreen change notification.
    FullscreenChanged(bool),
}

/// Effects the host must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Move the collection cursor one step back and supply the new image.
    RequestPrevious,
    /// Move the collection cursor one step forward and supply the new image.
    RequestNext,
    /// An image settled; forward it to the background side channel.
    SetBackground(ImageRecord),
    /// Ask the platform for a display mode change.
    Fullscreen(FullscreenRequest),
    /// The overlay is now hidden.
    Closed,
}

impl State {
    pub fn new(gesture: GestureConfig, platform: &impl FullscreenPlatform) -> Self {
        Self::with_fullscreen(gesture, FullscreenController::new(platform))
    }

    #[must_use]
    pub fn with_fullscreen(gesture: GestureConfig, fullscreen: FullscreenController) -> Self {
        Self {
            visible: false,
            phase: phase::State::new(),
            gesture: gesture::State::new(gesture),
            fullscreen,
            collection: OrderedCollection::default(),
            current: None,
        }
    }

    /// Handle an overlay message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open(record) => {
                self.visible = true;
                self.phase.handle(phase::Message::Open, &self.collection);
                self.set_current(record);
                Effect::None
            }
            Message::Close | Message::BackdropClicked | Message::CloseButton => {
                self.request_close()
            }
            Message::CollectionChanged(collection) => {
                self.collection = collection;
                Effect::None
            }
            Message::CurrentChanged(record) => {
                self.set_current(record);
                Effect::None
            }
            Message::AssetLoaded(id) => {
                match self.phase.handle(phase::Message::AssetLoaded(id), &self.collection) {
                    phase::Effect::Settled(id) => self
                        .settled_record(&id)
                        .map_or(Effect::None, Effect::SetBackground),
                    _ => Effect::None,
                }
            }
            Message::Previous => self.navigate(Direction::Previous),
            Message::Next => self.navigate(Direction::Next),
            Message::Key(_) | Message::Gesture(_) if self.fullscreen.is_close_pending() => {
                log::trace!("input ignored while waiting for fullscreen exit");
                Effect::None
            }
            Message::Key(key) => match keyboard::dispatch(key, &self.keyboard_snapshot()) {
                KeyAction::Navigate(direction) => self.navigate(direction),
                KeyAction::Close => self.request_close(),
                KeyAction::ToggleFullscreen => self.toggle_fullscreen(),
                KeyAction::Ignore => Effect::None,
            },
            Message::Gesture(gesture_msg) => {
                if !self.visible {
                    return Effect::None;
                }
                let navigation = self.navigation();
                match self.gesture.handle(gesture_msg, navigation) {
                    gesture::Effect::Swipe(direction) => {
                        let effect = self.phase.handle(
                            phase::Message::SwipeNavigate(direction),
                            &self.collection,
                        );
                        Self::map_move(effect)
                    }
                    gesture::Effect::Offset(_)
                    | gesture::Effect::Cancelled
                    | gesture::Effect::None => Effect::None,
                }
            }
            Message::ToggleFullscreen => self.toggle_fullscreen(),
            Message::ExitFullscreen => match self.fullscreen.exit() {
                Ok(Some(request)) => Effect::Fullscreen(request),
                Ok(None) => Effect::None,
                Err(err) => {
                    log::debug!("{err}");
                    Effect::None
                }
            },
            Message::FullscreenChanged(active) => match self.fullscreen.sync(active) {
                SyncOutcome::DeferredClose => self.close_now(),
                SyncOutcome::None => Effect::None,
            },
        }
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Keyboard listening follows visibility exactly.
    #[must_use]
    pub fn wants_keyboard(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn phase(&self) -> ViewerPhase {
        self.phase.phase()
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageRecord> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn collection(&self) -> &OrderedCollection {
        &self.collection
    }

    /// Prev/next permissions for the current snapshot.
    #[must_use]
    pub fn navigation(&self) -> NavigationFlags {
        if self.fullscreen.is_close_pending() {
            return NavigationFlags::default();
        }
        NavigationFlags::compute(self.phase.current(), &self.collection, self.phase.phase())
    }

    #[must_use]
    pub fn keyboard_snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            visible: self.visible,
            navigation: self.navigation(),
            fullscreen_active: self.fullscreen.is_active(),
            fullscreen_supported: self.fullscreen.is_supported(),
        }
    }

    /// Horizontal drag offset of the displayed image.
    #[must_use]
    pub fn visual_offset(&self) -> f32 {
        self.gesture.offset()
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture.gesture()
    }

    #[must_use]
    pub fn fullscreen(&self) -> &FullscreenController {
        &self.fullscreen
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_active()
    }

    #[must_use]
    pub fn spinner(&self) -> Spinner {
        match self.phase.phase() {
            ViewerPhase::GlobalLoading => Spinner::Global,
            ViewerPhase::ImageLoading => Spinner::Image,
            ViewerPhase::Closed | ViewerPhase::ImageLoaded => Spinner::Hidden,
        }
    }

    /// Whether the image itself is drawn (hidden behind the global spinner).
    #[must_use]
    pub fn image_visible(&self) -> bool {
        matches!(
            self.phase.phase(),
            ViewerPhase::ImageLoading | ViewerPhase::ImageLoaded
        )
    }

    /// Title and author bar: hidden until the overlay settles once and in fullscreen.
    #[must_use]
    pub fn show_info(&self) -> bool {
        self.image_visible() && !self.fullscreen.is_active()
    }

    #[must_use]
    pub fn fullscreen_supported(&self) -> bool {
        self.fullscreen.is_supported()
    }

    #[must_use]
    pub fn show_fullscreen_button(&self) -> bool {
        self.show_info() && self.fullscreen.is_supported()
    }

    fn set_current(&mut self, record: ImageRecord) {
        let id = record.id().clone();
        self.current = Some(record);
        self.phase
            .handle(phase::Message::TargetChanged(id), &self.collection);
    }

    fn settled_record(&self, id: &ImageId) -> Option<ImageRecord> {
        self.current
            .as_ref()
            .filter(|record| record.id() == id)
            .or_else(|| self.collection.find(id))
            .cloned()
    }

    fn navigate(&mut self, direction: Direction) -> Effect {
        if self.fullscreen.is_close_pending() {
            return Effect::None;
        }
        let effect = self
            .phase
            .handle(phase::Message::Navigate(direction), &self.collection);
        Self::map_move(effect)
    }

    fn map_move(effect: phase::Effect) -> Effect {
        match effect {
            phase::Effect::RequestMove(Direction::Previous) => Effect::RequestPrevious,
            phase::Effect::RequestMove(Direction::Next) => Effect::RequestNext,
            _ => Effect::None,
        }
    }

    fn toggle_fullscreen(&mut self) -> Effect {
        match self.fullscreen.toggle() {
            Ok(Some(request)) => Effect::Fullscreen(request),
            Ok(None) => Effect::None,
            Err(err) => {
                log::debug!("{err}");
                Effect::None
            }
        }
    }

    fn request_close(&mut self) -> Effect {
        if !self.visible {
            self.phase.handle(phase::Message::Close, &self.collection);
            return Effect::None;
        }
        match self.fullscreen.request_close() {
            CloseDecision::CloseNow => self.close_now(),
            CloseDecision::ExitFirst(request) => Effect::Fullscreen(request),
        }
    }

    fn close_now(&mut self) -> Effect {
        let was_visible = std::mem::replace(&mut self.visible, false);
        self.gesture.reset();
        self.fullscreen.clear_pending_close();
        let effect = self.phase.handle(phase::Message::Close, &self.collection);

        if was_visible || effect == phase::Effect::Closed {
            Effect::Closed
        } else {
            Effect::None
        }
    }
}
