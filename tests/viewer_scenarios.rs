// SPDX-License-Identifier: MPL-2.0
//! End-to-end walks through the viewer overlay, driven the way the host
//! application drives it: messages in, effects out, host answers effects.

use iced::Point;
use shot_lens::domain::gallery::{ImageId, ImageRecord, OrderedCollection};
use shot_lens::viewer::gesture::Message as GestureMessage;
use shot_lens::viewer::overlay::{Effect, Message};
use shot_lens::viewer::{
    DragSource, FullscreenCapability, FullscreenController, FullscreenRequest, GestureConfig,
    ImageViewer, Spinner, UnsupportedReason, ViewerKey, ViewerPhase,
};
use std::time::{Duration, Instant};

fn record(key: &str) -> ImageRecord {
    ImageRecord::new(key, format!("Shot {key}"), format!("/shots/{key}.png"), "Grace")
}

fn abc() -> Vec<ImageRecord> {
    vec![record("a"), record("b"), record("c")]
}

fn viewer_with(capability: FullscreenCapability, config: GestureConfig) -> ImageViewer {
    let mut viewer =
        ImageViewer::with_fullscreen(config, FullscreenController::with_capability(capability));
    let collection = OrderedCollection::new(abc()).expect("unique ids");
    assert_eq!(viewer.handle(Message::CollectionChanged(collection)), Effect::None);
    viewer
}

fn viewer() -> ImageViewer {
    viewer_with(FullscreenCapability::Supported, GestureConfig::default())
}

/// Minimal host: owns the cursor and answers move requests.
struct Host {
    records: Vec<ImageRecord>,
    cursor: usize,
}

impl Host {
    fn open(viewer: &mut ImageViewer, index: usize) -> Self {
        let records = abc();
        viewer.handle(Message::Open(records[index].clone()));
        Self {
            records,
            cursor: index,
        }
    }

    fn answer(&mut self, viewer: &mut ImageViewer, effect: Effect) -> Option<ImageId> {
        let index = match effect {
            Effect::RequestNext => self.cursor + 1,
            Effect::RequestPrevious => self.cursor.checked_sub(1)?,
            _ => return None,
        };
        let record = self.records.get(index)?.clone();
        self.cursor = index;
        let id = record.id().clone();
        viewer.handle(Message::CurrentChanged(record));
        Some(id)
    }
}

fn swipe(viewer: &mut ImageViewer, from_x: f32, to_x: f32) -> Effect {
    let now = Instant::now();
    viewer.handle(Message::Gesture(GestureMessage::Start {
        source: DragSource::Touch,
        position: Point::new(from_x, 300.0),
        at: now,
    }));
    viewer.handle(Message::Gesture(GestureMessage::Move {
        source: DragSource::Touch,
        position: Point::new(to_x, 302.0),
    }));
    viewer.handle(Message::Gesture(GestureMessage::End {
        source: DragSource::Touch,
        at: now + Duration::from_millis(300),
    }))
}

#[test]
fn browsing_forward_through_three_images() {
    let mut viewer = viewer();
    let mut host = Host::open(&mut viewer, 1);
    assert_eq!(viewer.phase(), ViewerPhase::GlobalLoading);
    assert_eq!(viewer.spinner(), Spinner::Global);

    let effect = viewer.handle(Message::AssetLoaded(ImageId::new("b")));
    assert_eq!(effect, Effect::SetBackground(record("b")));
    assert!(!viewer.navigation().prev_disabled());
    assert!(!viewer.navigation().next_disabled());

    let effect = viewer.handle(Message::Next);
    assert_eq!(effect, Effect::RequestNext);
    assert_eq!(host.answer(&mut viewer, effect), Some(ImageId::new("c")));
    assert_eq!(viewer.phase(), ViewerPhase::ImageLoading);
    assert_eq!(viewer.spinner(), Spinner::Image);

    // While loading, neither direction is available.
    assert!(viewer.navigation().prev_disabled());
    assert!(viewer.navigation().next_disabled());
    assert_eq!(viewer.handle(Message::Previous), Effect::None);

    let effect = viewer.handle(Message::AssetLoaded(ImageId::new("c")));
    assert_eq!(effect, Effect::SetBackground(record("c")));
    assert_eq!(viewer.phase(), ViewerPhase::ImageLoaded);
    assert!(viewer.navigation().next_disabled());
    assert_eq!(viewer.handle(Message::Next), Effect::None);
}

#[test]
fn late_load_for_a_previous_target_is_ignored() {
    let mut viewer = viewer();
    let mut host = Host::open(&mut viewer, 0);
    viewer.handle(Message::AssetLoaded(ImageId::new("a")));

    let effect = viewer.handle(Message::Key(ViewerKey::Next));
    host.answer(&mut viewer, effect);

    assert_eq!(viewer.handle(Message::AssetLoaded(ImageId::new("a"))), Effect::None);
    assert_eq!(viewer.phase(), ViewerPhase::ImageLoading);

    assert_eq!(
        viewer.handle(Message::AssetLoaded(ImageId::new("b"))),
        Effect::SetBackground(record("b"))
    );
    // A duplicate completion after settling changes nothing.
    assert_eq!(viewer.handle(Message::AssetLoaded(ImageId::new("b"))), Effect::None);
}

#[test]
fn swipe_left_moves_forward_with_global_spinner() {
    let mut viewer = viewer();
    let mut host = Host::open(&mut viewer, 0);
    viewer.handle(Message::AssetLoaded(ImageId::new("a")));

    let effect = swipe(&mut viewer, 400.0, 250.0);
    assert_eq!(effect, Effect::RequestNext);
    assert_eq!(viewer.phase(), ViewerPhase::GlobalLoading);
    assert_eq!(viewer.visual_offset(), 0.0);
    assert!(!viewer.gesture().active);

    host.answer(&mut viewer, effect);
    assert_eq!(
        viewer.handle(Message::AssetLoaded(ImageId::new("b"))),
        Effect::SetBackground(record("b"))
    );
}

#[test]
fn swipe_toward_a_boundary_does_nothing() {
    let mut viewer = viewer();
    Host::open(&mut viewer, 0);
    viewer.handle(Message::AssetLoaded(ImageId::new("a")));

    // Dragging right asks for "previous", which does not exist on the first image.
    assert_eq!(swipe(&mut viewer, 100.0, 400.0), Effect::None);
    assert_eq!(viewer.phase(), ViewerPhase::ImageLoaded);
}

#[test]
fn short_drag_below_threshold_is_not_a_swipe() {
    let config = GestureConfig {
        min_distance: 10.0,
        swipe_threshold: 120.0,
        flick_velocity: None,
    };
    let mut viewer = viewer_with(FullscreenCapability::Supported, config);
    Host::open(&mut viewer, 1);
    viewer.handle(Message::AssetLoaded(ImageId::new("b")));

    assert_eq!(swipe(&mut viewer, 300.0, 250.0), Effect::None);
    assert_eq!(viewer.phase(), ViewerPhase::ImageLoaded);

    assert_eq!(swipe(&mut viewer, 300.0, 150.0), Effect::RequestNext);
}

#[test]
fn live_offset_follows_the_drag_only_when_allowed() {
    let mut viewer = viewer();
    Host::open(&mut viewer, 0);
    viewer.handle(Message::AssetLoaded(ImageId::new("a")));

    let now = Instant::now();
    viewer.handle(Message::Gesture(GestureMessage::Start {
        source: DragSource::Pointer,
        position: Point::new(200.0, 200.0),
        at: now,
    }));
    viewer.handle(Message::Gesture(GestureMessage::Move {
        source: DragSource::Pointer,
        position: Point::new(150.0, 200.0),
    }));
    assert_eq!(viewer.visual_offset(), -50.0);

    viewer.handle(Message::Gesture(GestureMessage::Move {
        source: DragSource::Pointer,
        position: Point::new(260.0, 200.0),
    }));
    // Toward "previous" on the first image: the image stays put.
    assert_eq!(viewer.visual_offset(), 0.0);

    viewer.handle(Message::Gesture(GestureMessage::Cancel));
    assert!(!viewer.gesture().active);
}

#[test]
fn closing_from_fullscreen_waits_for_the_window() {
    let mut viewer = viewer();
    Host::open(&mut viewer, 1);
    viewer.handle(Message::AssetLoaded(ImageId::new("b")));

    assert_eq!(
        viewer.handle(Message::Key(ViewerKey::ToggleFullscreen)),
        Effect::Fullscreen(FullscreenRequest::Enter)
    );
    viewer.handle(Message::FullscreenChanged(true));
    assert!(viewer.is_fullscreen());
    assert!(!viewer.show_info());

    assert_eq!(
        viewer.handle(Message::Close),
        Effect::Fullscreen(FullscreenRequest::Exit)
    );
    assert!(viewer.is_visible());

    assert_eq!(viewer.handle(Message::FullscreenChanged(false)), Effect::Closed);
    assert!(!viewer.is_visible());
    assert_eq!(viewer.phase(), ViewerPhase::Closed);
}

#[test]
fn escape_in_fullscreen_is_left_to_the_platform() {
    let mut viewer = viewer();
    Host::open(&mut viewer, 0);
    viewer.handle(Message::AssetLoaded(ImageId::new("a")));
    viewer.handle(Message::FullscreenChanged(true));

    assert_eq!(viewer.handle(Message::Key(ViewerKey::Escape)), Effect::None);
    assert!(viewer.is_visible());

    viewer.handle(Message::FullscreenChanged(false));
    assert_eq!(viewer.handle(Message::Key(ViewerKey::Escape)), Effect::Closed);
}

#[test]
fn close_is_idempotent() {
    let mut viewer = viewer();
    Host::open(&mut viewer, 2);

    assert_eq!(viewer.handle(Message::Close), Effect::Closed);
    assert_eq!(viewer.handle(Message::Close), Effect::None);
    assert_eq!(viewer.handle(Message::Key(ViewerKey::Escape)), Effect::None);
    assert!(!viewer.wants_keyboard());
}

#[test]
fn unsupported_fullscreen_hides_the_control() {
    let mut viewer = viewer_with(
        FullscreenCapability::Unsupported(UnsupportedReason::DisabledByConfig),
        GestureConfig::default(),
    );
    Host::open(&mut viewer, 0);
    viewer.handle(Message::AssetLoaded(ImageId::new("a")));

    assert!(!viewer.show_fullscreen_button());
    assert_eq!(viewer.handle(Message::ToggleFullscreen), Effect::None);
    assert_eq!(viewer.handle(Message::FullscreenChanged(true)), Effect::None);
    assert!(!viewer.is_fullscreen());
}

#[test]
fn reopening_starts_from_global_loading() {
    let mut viewer = viewer();
    Host::open(&mut viewer, 0);
    viewer.handle(Message::AssetLoaded(ImageId::new("a")));
    viewer.handle(Message::Close);

    Host::open(&mut viewer, 2);
    assert_eq!(viewer.phase(), ViewerPhase::GlobalLoading);
    assert_eq!(viewer.current().map(ImageRecord::id), Some(&ImageId::new("c")));
    assert_eq!(
        viewer.handle(Message::AssetLoaded(ImageId::new("c"))),
        Effect::SetBackground(record("c"))
    );
}
