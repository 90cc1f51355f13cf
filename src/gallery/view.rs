// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: header, photo grid, footer, and the lightbox overlay.

use crate::gallery::catalog::{MediaItem, CATALOG};
use crate::gallery::component::{Lightbox, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    mouse,
    widget::{button, mouse_area, scrollable, text, Column, Container, Image, Row, Stack, Text},
    ContentFit, Element, Font, Length,
};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Cards per grid row, from the display configuration.
    pub grid_columns: u16,
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page = build_page(&ctx);

    match ctx.state.lightbox() {
        Lightbox::Idle => page,
        Lightbox::Viewing { index } => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(build_lightbox(&ctx, index))
            .into(),
    }
}

fn build_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .push(build_header(ctx))
        .push(build_grid(ctx))
        .push(build_footer(ctx));

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("gallery-header-title"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let subtitle = Text::new(ctx.i18n.tr("gallery-header-subtitle"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .into()
}

fn build_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = usize::from(ctx.grid_columns.max(1));

    let mut grid = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center);
    let mut row = Row::new().spacing(spacing::LG);
    let mut cards_in_row = 0;

    for (index, item) in CATALOG.iter().enumerate() {
        row = row.push(build_card(ctx, index, item));
        cards_in_row += 1;

        if cards_in_row == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG);
            cards_in_row = 0;
        }
    }

    if cards_in_row > 0 {
        grid = grid.push(row);
    }

    grid.into()
}

fn build_card<'a>(ctx: &ViewContext<'a>, index: usize, item: &MediaItem) -> Element<'a, Message> {
    let is_hovered = ctx.state.hovered() == Some(index);

    let image_area: Element<'a, Message> = match ctx.state.photo(index) {
        Some(photo) => Image::new(photo.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .into(),
        None => build_loading_placeholder(
            ctx,
            Length::Fill,
            Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
        ),
    };

    let badge = Container::new(Text::new(item.glyph).size(typography::TITLE_SM))
        .width(Length::Fixed(sizing::BADGE_SIZE))
        .height(Length::Fixed(sizing::BADGE_SIZE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::badge);

    let badge_layer = Container::new(badge)
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Right);

    let mut image_stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .push(image_area)
        .push(badge_layer);

    if is_hovered {
        let zoom_hint = Container::new(Text::new("🔍").size(typography::GLYPH))
            .padding(spacing::SM)
            .style(styles::overlay::indicator(radius::FULL));

        image_stack = image_stack.push(
            Container::new(zoom_hint)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    let caption = Container::new(Text::new(caption(ctx.i18n, item)).size(typography::BODY_LG))
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center);

    let card = Container::new(Column::new().push(image_stack).push(caption))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card(is_hovered));

    mouse_area(card)
        .on_enter(Message::HoverEntered(index))
        .on_exit(Message::HoverExited(index))
        .on_press(Message::CardPressed(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Text::new(ctx.i18n.tr("gallery-footer-dedication"))
        .size(typography::BODY)
        .color(palette::GRAY_400)
        .into()
}

fn build_lightbox<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let surface = mouse_area(build_lightbox_surface(ctx, index)).on_press(Message::SurfacePressed);

    let layer = Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::overlay::backdrop);

    mouse_area(layer)
        .on_press(Message::BackdropPressed)
        .into()
}

fn build_lightbox_surface<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let enlarged: Element<'a, Message> = match ctx.state.photo(index) {
        Some(photo) => Image::new(photo.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(sizing::LIGHTBOX_IMAGE_MAX_WIDTH))
            .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_MAX_HEIGHT))
            .into(),
        None => build_loading_placeholder(
            ctx,
            Length::Fixed(sizing::LIGHTBOX_IMAGE_MAX_WIDTH),
            Length::Fixed(sizing::LIGHTBOX_IMAGE_MAX_HEIGHT),
        ),
    };

    let caption_row = match CATALOG.get(index) {
        Some(item) => Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(item.glyph).size(typography::GLYPH))
            .push(
                Text::new(caption(ctx.i18n, item))
                    .size(typography::TITLE_MD)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            ),
        None => Row::new(),
    };

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(enlarged)
            .push(caption_row),
    )
    .padding(spacing::LG)
    .style(styles::container::panel);

    let close_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .padding(spacing::XS)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(Message::ClosePressed);

    let close_layer = Container::new(close_button)
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Right);

    let previous_arrow = build_arrow("‹", Message::ViewPrevious);
    let previous_layer = Container::new(previous_arrow)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    let next_arrow = build_arrow("›", Message::ViewNext);
    let next_layer = Container::new(next_arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center);

    Stack::new()
        .push(panel)
        .push(close_layer)
        .push(previous_layer)
        .push(next_layer)
        .into()
}

fn build_arrow<'a>(label: &'a str, message: Message) -> iced::widget::Button<'a, Message> {
    button(
        Text::new(label)
            .size(typography::TITLE_LG)
            .align_x(Horizontal::Center),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_MEDIUM,
    ))
    .on_press(message)
}

fn build_loading_placeholder<'a>(
    ctx: &ViewContext<'a>,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    Container::new(
        text(ctx.i18n.tr("gallery-loading"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(width)
    .height(height)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

/// Caption shown under a card and inside the lightbox.
fn caption(i18n: &I18n, item: &MediaItem) -> String {
    format!("📸 {} {}", i18n.tr("gallery-photo-label"), item.ordinal)
}
