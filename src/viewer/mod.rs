// SPDX-License-Identifier: MPL-2.0
//! Image viewer overlay core.
//!
//! Every sub-module follows the same shape: a `State` that owns its data, a
//! `Message` describing input, and an `Effect` telling the caller what to do
//! next. None of them render anything; the widgets live in `crate::ui`.
//!
//! ```text
//! overlay::State (ImageViewer)
//! ├── phase::State          lifecycle + stale load rejection
//! ├── gesture::State        drag tracking, live offset, swipe confirmation
//! ├── fullscreen::FullscreenController
//! ├── keyboard::dispatch    stateless key → action mapping
//! └── navigation            boundary checks shared by all of the above
//! ```

pub mod fullscreen;
pub mod gesture;
pub mod keyboard;
pub mod navigation;
pub mod overlay;
pub mod phase;

pub use fullscreen::{
    FullscreenCapability, FullscreenController, FullscreenPlatform, FullscreenRequest,
    UnsupportedReason,
};
pub use gesture::{DragSource, GestureConfig, GestureState, SwipeDirection};
pub use keyboard::{KeyBindings, ViewerKey};
pub use navigation::{Direction, NavigationFlags};
pub use overlay::{Spinner, State as ImageViewer};
pub use phase::ViewerPhase;
