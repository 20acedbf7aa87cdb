//! Applying [`Theme`] and font size settings to an egui context.

use egui::{Color32, Context, FontId, Stroke, TextStyle, Visuals};

use crate::settings::Theme;

/// Visuals for a theme
pub fn visuals(theme: Theme) -> Visuals {
    match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
        Theme::Classic => classic_visuals(),
    }
}

/// Dark base with the blue/purple accents of the classic immediate-mode look
fn classic_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    let accent = Color32::from_rgb(90, 90, 200);

    visuals.panel_fill = Color32::from_rgb(30, 30, 40);
    visuals.window_fill = Color32::from_rgb(0, 0, 0).gamma_multiply(0.85);
    visuals.extreme_bg_color = Color32::from_rgb(20, 20, 30);
    visuals.selection.bg_fill = accent;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.hyperlink_color = Color32::from_rgb(140, 140, 230);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(55, 55, 110);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(55, 55, 110);
    visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(100, 100, 180);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(100, 100, 180);
    visuals.widgets.active.weak_bg_fill = Color32::from_rgb(120, 120, 210);
    visuals.widgets.active.bg_fill = Color32::from_rgb(120, 120, 210);
    visuals
}

pub fn apply_theme(ctx: &Context, theme: Theme) {
    ctx.set_visuals(visuals(theme));
}

/// Rescale text styles: body, button and monospace use `size`,
/// headings 1.25× and small text 0.75×.
pub fn apply_font_size(ctx: &Context, size: f32) {
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            let scale = match text_style {
                TextStyle::Heading => 1.25,
                TextStyle::Small => 0.75,
                _ => 1.0,
            };
            *font_id = FontId::new(size * scale, font_id.family.clone());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_dark_mode_flag() {
        assert!(visuals(Theme::Dark).dark_mode);
        assert!(!visuals(Theme::Light).dark_mode);
        assert!(visuals(Theme::Classic).dark_mode);
        assert_ne!(visuals(Theme::Classic), visuals(Theme::Dark));
    }

    #[test]
    fn test_apply_font_size() {
        let ctx = Context::default();
        apply_font_size(&ctx, 20.0);
        let style = ctx.style();
        assert_eq!(style.text_styles[&TextStyle::Body].size, 20.0);
        assert_eq!(style.text_styles[&TextStyle::Heading].size, 25.0);
        assert_eq!(style.text_styles[&TextStyle::Small].size, 15.0);
    }
}
