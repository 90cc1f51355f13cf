// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop and floating indicators.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Full-window dim layer behind the lightbox panel.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(container_background())),
        ..Default::default()
    }
}

/// Generic style for floating indicators like the hover zoom hint and the
/// lightbox caption chip.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a > 0.0 && color.a < 1.0);
                assert_eq!((color.r, color.g, color.b), (0.0, 0.0, 0.0));
            }
            _ => panic!("expected a background color"),
        }
    }
}
