// SPDX-License-Identifier: MPL-2.0
//! Pattern viewer rendering: sidebar list plus the detail pane.

use crate::i18n::fluent::I18n;
use crate::patterns::catalog::{PatternRecord, CATALOG};
use crate::patterns::component::{Message, State};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, scrollable, text, Column, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the pattern viewer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the pattern viewer screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(build_sidebar(&ctx))
        .push(build_detail(&ctx))
        .into()
}

fn build_sidebar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("patterns-sidebar-title"))
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let mut rows = Column::new()
        .spacing(spacing::XXS)
        .push(Container::new(heading).padding(spacing::SM));

    for record in &CATALOG {
        rows = rows.push(build_sidebar_row(ctx, record));
    }

    Container::new(scrollable(rows.padding(spacing::XS)))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

fn build_sidebar_row<'a>(
    ctx: &ViewContext<'a>,
    record: &'static PatternRecord,
) -> Element<'a, Message> {
    let is_active = ctx.state.selected_id() == record.id;

    let label = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(record.icon).size(typography::BODY_LG))
        .push(Text::new(record.short_name).size(typography::BODY_LG));

    let row = button(label)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::PatternSelected(record.id));

    let row = if is_active {
        row.style(styles::button::selected)
    } else {
        row.style(styles::button::unselected)
    };

    row.into()
}

fn build_detail<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.state.selected_record() {
        Some(record) => build_record_detail(ctx, record),
        None => build_empty_detail(ctx),
    }
}

/// Empty-state pane shown when `selected_id` references no record.
fn build_empty_detail<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        text(ctx.i18n.tr("patterns-detail-empty"))
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn build_record_detail<'a>(
    ctx: &ViewContext<'a>,
    record: &'static PatternRecord,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(record.icon).size(typography::GLYPH))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(record.name)
                        .size(typography::TITLE_LG)
                        .font(Font {
                            weight: Weight::Bold,
                            ..Font::default()
                        }),
                )
                .push(
                    Text::new(record.summary)
                        .size(typography::BODY_LG)
                        .color(palette::GRAY_400),
                ),
        );

    let usage = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("patterns-usage-title"))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(text(record.usage_notes).size(typography::BODY));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(header)
        .push(text(record.long_description).size(typography::BODY))
        .push(build_code_section(ctx, record))
        .push(usage);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Collapsible code section: header row toggles, listing shows when expanded.
fn build_code_section<'a>(
    ctx: &ViewContext<'a>,
    record: &'static PatternRecord,
) -> Element<'a, Message> {
    let is_expanded = ctx.state.code_expanded();

    let indicator = Text::new(if is_expanded { "▼" } else { "▶" }).size(typography::BODY);

    let hint_key = if is_expanded {
        "patterns-code-collapse"
    } else {
        "patterns-code-expand"
    };

    let header_content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(Text::new(ctx.i18n.tr("patterns-code-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr(hint_key))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let header = button(header_content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::section_toggle)
        .on_press(Message::CodeToggled);

    let mut section = Column::new().spacing(spacing::XS).push(header);

    if is_expanded {
        let listing = Container::new(
            text(record.sample_code)
                .size(typography::BODY_SM)
                .font(Font::MONOSPACE),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::code_block);

        section = section.push(listing);
    }

    section.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::component::{self, Message as PatternsMessage};

    #[test]
    fn patterns_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
        };
        let _element = view(ctx);
    }

    #[test]
    fn view_renders_the_empty_detail_for_an_unknown_selection() {
        let i18n = I18n::default();
        let mut state = State::new();
        component::update(&mut state, PatternsMessage::PatternSelected(99));

        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
        };
        let _element = view(ctx);
    }

    #[test]
    fn view_renders_with_the_code_section_expanded() {
        let i18n = I18n::default();
        let mut state = State::new();
        component::update(&mut state, PatternsMessage::CodeToggled);

        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
        };
        let _element = view(ctx);
    }
}
