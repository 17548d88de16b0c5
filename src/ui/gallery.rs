// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the list of images in the scanned directory, drawn over
//! a dimmed copy of the last image the viewer settled on.

use crate::app::gallery::Gallery;
use crate::app::loader::LoadedAsset;
use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, image, Column, Container, Scrollable, Stack, Text};
use iced::{ContentFit, Element, Length};

const PANEL_MAX_WIDTH: f32 = 640.0;

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub background: Option<&'a LoadedAsset>,
    /// i18n key of a warning to show above the list.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("gallery-heading")).size(typography::TITLE_LG));

    if let Some(key) = ctx.notice {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::notice),
        );
    }

    let collection = ctx.gallery.collection();
    if collection.is_empty() {
        column = column.push(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY));
    } else {
        column = column.push(Text::new(ctx.i18n.tr("gallery-open-hint")).size(typography::CAPTION));

        let entries = collection.iter().fold(
            Column::new().spacing(spacing::XXS),
            |entries, record| {
                entries.push(
                    button(Text::new(record.display_name().to_string()).size(typography::BODY_LG))
                        .width(Length::Fill)
                        .padding(spacing::XS)
                        .style(styles::button::gallery_entry)
                        .on_press(Message::OpenImage(record.id().clone())),
                )
            },
        );
        column = column.push(Scrollable::new(entries).height(Length::Fill));
    }

    let panel = Container::new(column)
        .padding(spacing::LG)
        .max_width(PANEL_MAX_WIDTH)
        .height(Length::Fill)
        .style(styles::container::panel);

    let foreground = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center);

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
    if let Some(asset) = ctx.background {
        stack = stack.push(
            image::Image::new(asset.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(opacity::BACKDROP_IMAGE),
        );
    }
    stack.push(foreground).into()
}
