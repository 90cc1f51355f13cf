// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the detail pane and the lightbox panel.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gallery card surface. Hovered cards lift with a stronger shadow and a
/// brand-colored border.
pub fn card(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                color: if hovered {
                    palette::PRIMARY_400
                } else {
                    Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..palette::GRAY_400
                    }
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: if hovered { shadow::LG } else { shadow::SM },
            ..Default::default()
        }
    }
}

/// Circular ordinal badge shown on each gallery card.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::WHITE,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Sidebar column background for the pattern browser.
pub fn sidebar(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(weak)),
        ..Default::default()
    }
}

/// Monospace code listing surface. Always dark so sample code reads the
/// same in both themes.
pub fn code_block(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_100),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovered_card_uses_brand_border() {
        let theme = Theme::Light;
        let resting = card(false)(&theme);
        let hovered = card(true)(&theme);

        assert_ne!(resting.border.color, hovered.border.color);
        assert_eq!(hovered.border.color, palette::PRIMARY_400);
    }

    #[test]
    fn code_block_is_dark_in_both_themes() {
        let light = code_block(&Theme::Light);
        let dark = code_block(&Theme::Dark);

        assert_eq!(light.background, dark.background);
    }
}
