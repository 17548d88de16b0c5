// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is always drawn; the viewer overlay is stacked on top of it
//! while visible.

use super::loader::LoadedAsset;
use super::gallery::Gallery;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::{gallery, viewer};
use crate::viewer::ImageViewer;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub viewer: &'a ImageViewer,
    pub displayed: Option<&'a LoadedAsset>,
    pub background: Option<&'a LoadedAsset>,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        background: ctx.background,
        notice: ctx.notice,
    });

    if !ctx.viewer.is_visible() {
        return gallery_view;
    }

    let overlay_view = viewer::view(viewer::ViewContext {
        i18n: ctx.i18n,
        viewer: ctx.viewer,
        displayed: ctx.displayed,
    });

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(gallery_view)
        .push(overlay_view)
        .into()
}
