// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use vitrine::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
    use vitrine::ui::styles::{button, container, overlay};
    use vitrine::ui::theming::ThemeMode;

    #[test]
    fn all_styles_compile_for_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed] {
                let _ = button::selected(&theme, status);
                let _ = button::unselected(&theme, status);
                let _ = button::section_toggle(&theme, status);
                let _ = button::overlay(
                    palette::WHITE,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_STRONG,
                )(&theme, status);
            }

            let _ = container::panel(&theme);
            let _ = container::card(false)(&theme);
            let _ = container::card(true)(&theme);
            let _ = container::badge(&theme);
            let _ = container::sidebar(&theme);
            let _ = container::code_block(&theme);
            let _ = overlay::backdrop(&theme);
            let _ = overlay::indicator(radius::FULL)(&theme);
        }
    }

    #[test]
    fn selected_sidebar_entry_is_visually_distinct() {
        for theme in [Theme::Light, Theme::Dark] {
            let active = button::selected(&theme, Status::Active);
            let resting = button::unselected(&theme, Status::Active);
            assert_ne!(active.background, resting.background);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::CARD_WIDTH;

        // Typography
        let _ = typography::TITLE_LG;
    }

    #[test]
    fn theme_modes_resolve_to_matching_iced_themes() {
        assert_eq!(ThemeMode::Light.to_iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), Theme::Dark);

        // System mode resolves to one of the two built-ins either way.
        let resolved = ThemeMode::System.to_iced_theme();
        assert!(resolved == Theme::Light || resolved == Theme::Dark);
    }
}
