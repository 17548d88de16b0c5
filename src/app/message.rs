// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::gallery::Gallery;
use super::loader::LoadedAsset;
use super::subscription::PointerEvent;
use crate::domain::gallery::ImageId;
use crate::error::Error;
use crate::viewer::overlay;
use iced::keyboard::Key;
use iced::window;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the viewer overlay.
    Viewer(overlay::Message),
    /// A gallery entry was clicked.
    OpenImage(ImageId),
    /// Result from async directory scanning.
    GalleryScanned(Result<Gallery, Error>),
    /// Result from loading an asset, tagged with the id it was started for.
    AssetLoaded(ImageId, Result<LoadedAsset, Error>),
    /// Raw pointer or touch input.
    Pointer {
        window: window::Id,
        event: PointerEvent,
    },
    /// A key press not captured by a widget (only while the viewer listens).
    KeyPressed(Key),
    /// A press landed on the image area; swallowed so it does not reach the backdrop.
    ContentPressed,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOT_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directory to browse. Defaults to the working directory.
    pub directory: Option<String>,
}
