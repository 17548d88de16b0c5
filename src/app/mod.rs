// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the viewer overlay.
//!
//! The `App` struct plays the provider role for the viewer: it owns the
//! ordered gallery, starts asset loads, and carries out the effects the
//! overlay returns (cursor moves, background updates, fullscreen changes).

pub mod gallery;
pub mod loader;
mod message;
pub mod paths;
pub mod platform;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::PointerEvent;

use crate::config::{self, Config};
use crate::domain::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::viewer::overlay::{self, Effect};
use crate::viewer::{
    Direction, FullscreenPlatform, FullscreenRequest, ImageViewer, KeyBindings, ViewerKey,
};
use gallery::Gallery;
use iced::{window, Element, Point, Subscription, Task, Theme};
use loader::LoadedAsset;
use platform::WindowPlatform;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    bindings: KeyBindings,
    sort_order: config::SortOrder,
    gallery: Gallery,
    viewer: ImageViewer,
    /// Last settled asset, shown while the next one loads.
    displayed: Option<LoadedAsset>,
    /// Asset for the current target, waiting for the viewer to accept it.
    pending: Option<LoadedAsset>,
    /// Dimmed backdrop behind the gallery.
    background: Option<LoadedAsset>,
    window_id: Option<window::Id>,
    cursor: Option<Point>,
    /// i18n key of a notice shown above the gallery.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.collection().len())
            .field("viewer_visible", &self.viewer.is_visible())
            .field("phase", &self.viewer.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Call [`paths::init_cli_overrides`] first so the config directory override applies.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
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

impl App {
    /// Loads configuration and starts scanning the gallery directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let platform = WindowPlatform::new(config.fullscreen_enabled());
        let mut app = Self::with_config(flags.lang, &config, &platform);
        app.notice = config_warning;

        let directory = flags
            .directory
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let task = Task::perform(
            gallery::scan_async(directory, app.sort_order),
            Message::GalleryScanned,
        );
        (app, task)
    }

    fn with_config(
        lang: Option<String>,
        config: &Config,
        platform: &impl FullscreenPlatform,
    ) -> Self {
        Self {
            i18n: I18n::new(lang, config),
            bindings: config.key_bindings(),
            sort_order: config.sort_order(),
            gallery: Gallery::default(),
            viewer: ImageViewer::new(config.gesture_config(), platform),
            displayed: None,
            pending: None,
            background: None,
            window_id: None,
            cursor: None,
            notice: None,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.current() {
            Some(record) if self.viewer.is_visible() => {
                format!("{} - {app_name}", record.display_name())
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_pointer_subscription(),
            subscription::create_keyboard_subscription(self.viewer.wants_keyboard()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                let effect = self.viewer.handle(viewer_message);
                self.apply_effect(effect)
            }
            Message::OpenImage(id) => {
                let Some(record) = self.gallery.select(&id) else {
                    log::debug!("ignoring open for unknown image {id}");
                    return Task::none();
                };
                self.pending = None;
                self.notice = None;
                let effect = self.viewer.handle(overlay::Message::Open(record.clone()));
                Task::batch([self.apply_effect(effect), load(record)])
            }
            Message::GalleryScanned(Ok(gallery)) => {
                let collection = gallery.collection().clone();
                self.gallery = gallery;
                let effect = self
                    .viewer
                    .handle(overlay::Message::CollectionChanged(collection));
                self.apply_effect(effect)
            }
            Message::GalleryScanned(Err(err)) => {
                log::warn!("gallery scan failed: {err}");
                self.notice = Some(err.i18n_key().to_string());
                Task::none()
            }
            Message::AssetLoaded(id, Ok(asset)) => {
                if self.viewer.current().map(ImageRecord::id) == Some(&id) {
                    self.pending = Some(asset);
                }
                let effect = self.viewer.handle(overlay::Message::AssetLoaded(id));
                self.apply_effect(effect)
            }
            Message::AssetLoaded(id, Err(err)) => {
                if self.viewer.current().map(ImageRecord::id) != Some(&id) {
                    log::trace!("discarding stale load failure for {id}: {err}");
                    return Task::none();
                }
                // The spinner stays up; closing the overlay is the way out.
                self.notice = Some(err.i18n_key().to_string());
                Task::none()
            }
            Message::Pointer { window, event } => {
                self.window_id = Some(window);
                if let PointerEvent::CursorMoved(position) = event {
                    self.cursor = Some(position);
                }
                match subscription::gesture_message(event, self.cursor, Instant::now()) {
                    Some(gesture) => {
                        let effect = self.viewer.handle(overlay::Message::Gesture(gesture));
                        self.apply_effect(effect)
                    }
                    None => Task::none(),
                }
            }
            Message::KeyPressed(key) => match self.bindings.resolve(&key) {
                // Escape out of fullscreen is the window's own behavior.
                Some(ViewerKey::Escape) if self.viewer.is_fullscreen() => {
                    platform::apply(FullscreenRequest::Exit, self.window_id)
                }
                Some(viewer_key) => {
                    let effect = self.viewer.handle(overlay::Message::Key(viewer_key));
                    self.apply_effect(effect)
                }
                None => Task::none(),
            },
            Message::ContentPressed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            viewer: &self.viewer,
            displayed: self.displayed.as_ref(),
            background: self.background.as_ref(),
            notice: self.notice.as_deref(),
        })
    }

    fn apply_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::RequestPrevious => self.step(Direction::Previous),
            Effect::RequestNext => self.step(Direction::Next),
            Effect::SetBackground(record) => {
                if self.pending.as_ref().map(|asset| &asset.id) == Some(record.id()) {
                    self.displayed = self.pending.take();
                    self.background = self.displayed.clone();
                }
                self.notice = None;
                log::debug!("background set to {}", record.id());
                Task::none()
            }
            Effect::Fullscreen(request) => platform::apply(request, self.window_id),
            Effect::Closed => {
                self.pending = None;
                self.displayed = None;
                Task::none()
            }
        }
    }

    fn step(&mut self, direction: Direction) -> Task<Message> {
        let Some(record) = self.gallery.step(direction) else {
            log::debug!("gallery cursor cannot move {direction:?}");
            return Task::none();
        };
        self.pending = None;
        let effect = self
            .viewer
            .handle(overlay::Message::CurrentChanged(record.clone()));
        Task::batch([self.apply_effect(effect), load(record)])
    }
}

fn load(record: ImageRecord) -> Task<Message> {
    Task::perform(loader::load_asset(record), |(id, result)| {
        Message::AssetLoaded(id, result)
    })
}
