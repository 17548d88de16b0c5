// SPDX-License-Identifier: MPL-2.0
//! Viewer overlay rendering.
//!
//! Layers, bottom to top: a backdrop that closes the overlay when clicked,
//! then the controls column (top bar, prev/image/next row, info bar). Empty
//! space in the controls column lets presses fall through to the backdrop;
//! the image area swallows them.

use crate::app::loader::LoadedAsset;
use crate::app::Message;
use crate::domain::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use crate::viewer::overlay;
use crate::viewer::{ImageViewer, Spinner};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length, Padding};

/// Context required to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a ImageViewer,
    /// Last settled asset.
    pub displayed: Option<&'a LoadedAsset>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Viewer(overlay::Message::BackdropClicked));

    let navigation = ctx.viewer.navigation();
    let prev = overlay_button(
        ctx.i18n.tr("viewer-prev"),
        (!navigation.prev_disabled()).then_some(Message::Viewer(overlay::Message::Previous)),
    );
    let next = overlay_button(
        ctx.i18n.tr("viewer-next"),
        (!navigation.next_disabled()).then_some(Message::Viewer(overlay::Message::Next)),
    );

    let middle = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(prev)
        .push(image_area(&ctx))
        .push(next);

    let mut controls = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top_bar(&ctx))
        .push(middle);

    if ctx.viewer.show_info() {
        if let Some(record) = ctx.viewer.current() {
            controls = controls.push(info_bar(ctx.i18n, record));
        }
    }

    Stack::new().push(backdrop).push(controls).into()
}

fn overlay_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press_maybe(on_press)
        .into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    if ctx.viewer.is_fullscreen() {
        row = row.push(overlay_button(
            ctx.i18n.tr("viewer-exit-fullscreen"),
            Some(Message::Viewer(overlay::Message::ExitFullscreen)),
        ));
    } else if ctx.viewer.show_fullscreen_button() {
        row = row.push(
            button(Text::new(ctx.i18n.tr("viewer-fullscreen")).size(typography::BODY))
                .padding(spacing::SM)
                .style(styles::button_primary)
                .on_press(Message::Viewer(overlay::Message::ToggleFullscreen)),
        );
    }

    row = row.push(overlay_button(
        ctx.i18n.tr("viewer-close"),
        Some(Message::Viewer(overlay::Message::CloseButton)),
    ));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .into()
}

fn image_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    if let Some(asset) = ctx.displayed.filter(|_| ctx.viewer.image_visible()) {
        let offset = ctx.viewer.visual_offset();
        let shifted = Container::new(
            image::Image::new(asset.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 0.0,
            right: (-offset).max(0.0),
            bottom: 0.0,
            left: offset.max(0.0),
        });
        layers = layers.push(mouse_area(shifted).on_press(Message::ContentPressed));
    }

    match ctx.viewer.spinner() {
        Spinner::Hidden => {}
        Spinner::Image => {
            layers = layers.push(loading(ctx.i18n, Vertical::Top, typography::CAPTION));
        }
        Spinner::Global => {
            layers = layers.push(loading(ctx.i18n, Vertical::Center, typography::TITLE_MD));
        }
    }

    layers.into()
}

fn loading<'a>(i18n: &I18n, align_y: Vertical, size: f32) -> Element<'a, Message> {
    let indicator = Container::new(Text::new(i18n.tr("viewer-loading")).size(size))
        .padding(spacing::SM)
        .style(styles::overlay::indicator(radius::MD));

    Container::new(indicator)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .align_y(align_y)
        .into()
}

fn info_bar<'a>(i18n: &I18n, record: &ImageRecord) -> Element<'a, Message> {
    let author = if record.author_name().is_empty() {
        i18n.tr("viewer-unknown-author")
    } else {
        i18n.tr_with_args("viewer-by-author", &[("author", record.author_name())])
    };

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(record.display_name().to_string()).size(typography::TITLE_MD))
        .push(Text::new(author).size(typography::BODY));

    Container::new(
        Container::new(content)
            .padding(spacing::SM)
            .style(styles::overlay::info_bar),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}
