// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button, container};
    use iced::Theme;
    use render_folio::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
    use render_folio::ui::styles;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Light;

        let _ = styles::button::tile(1.0)(&theme, button::Status::Active);
        let _ = styles::button::text_link(palette::STONE_300, palette::WHITE)(
            &theme,
            button::Status::Hovered,
        );
        let _ = styles::button::tile_wash(true);
    }

    #[test]
    fn navbar_gains_background_when_scrolled() {
        let theme = Theme::Light;
        let top = styles::container::navbar(false)(&theme);
        let scrolled = styles::container::navbar(true)(&theme);

        let alpha = |style: &container::Style| match style.background {
            Some(iced::Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(&scrolled) > alpha(&top));
        assert!(scrolled.shadow.blur_radius > top.shadow.blur_radius);
    }

    #[test]
    fn lightbox_backdrop_reaches_full_strength() {
        let theme = Theme::Light;
        let style = styles::container::backdrop(1.0)(&theme);
        match style.background {
            Some(iced::Background::Color(color)) => {
                assert!((color.a - opacity::BACKDROP).abs() < f32::EPSILON);
            }
            _ => panic!("backdrop must be a solid color"),
        }
    }

    #[test]
    fn layout_tokens_are_ordered() {
        assert!(spacing::XS < spacing::MD);
        assert!(spacing::MD < spacing::XXXL);
        assert!(sizing::BREAKPOINT_MD < sizing::BREAKPOINT_LG);
        assert!(sizing::PROSE_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);
        assert!(typography::CAPTION < typography::BODY);
        assert!(typography::BODY < typography::DISPLAY);
    }
}
