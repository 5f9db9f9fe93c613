use eframe::egui::{
    Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
    WidgetInfo, WidgetType,
};

use crate::ui::{Palette, UI_CONFIG};

/// Green for gains, red for losses, subdued for flat.
pub fn change_color(value: f64, palette: &Palette) -> Color32 {
    if value > 0.0 {
        palette.positive
    } else if value < 0.0 {
        palette.negative
    } else {
        palette.text_subdued
    }
}

pub(crate) trait UiStyleExt {
    /// Label acting as a tab: card colored when idle, accent bg when selected.
    fn tab_button(
        &mut self,
        text: &str,
        is_selected: bool,
        palette: &Palette,
        width: f32,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>, palette: &Palette);
    fn metric(&mut self, label: &str, value: &str, color: Color32, palette: &Palette);
    fn overview_item(&mut self, label: &str, value: &str, palette: &Palette);
}

impl UiStyleExt for Ui {
    fn tab_button(
        &mut self,
        text: &str,
        is_selected: bool,
        palette: &Palette,
        width: f32,
    ) -> Response {
        let padding = Vec2::new(0.0, 7.0);
        let idle_color = palette.card_text;
        let galley = self
            .painter()
            .layout_no_wrap(text.to_uppercase(), FontId::proportional(12.0), idle_color);
        let desired_size = Vec2::new(width, galley.size().y + padding.y * 2.0);
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let (bg_fill, text_color) = if is_selected {
                (palette.card, palette.accent)
            } else if response.hovered() || response.has_focus() {
                (palette.card.gamma_multiply(0.8), palette.accent)
            } else {
                (palette.card, idle_color)
            };

            self.painter().rect(
                rect,
                CornerRadius::same(UI_CONFIG.layout.corner_radius * 2),
                bg_fill,
                Stroke::NONE,
                StrokeKind::Inside,
            );
            let text_pos = rect.center() - galley.size() / 2.0;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>, palette: &Palette) {
        self.label(RichText::new(text).small().color(palette.text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32, palette: &Palette) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{}:", label), palette);
            ui.label(RichText::new(value).color(color));
        });
    }

    /// Small uppercase caption over its value, centered in the column.
    fn overview_item(&mut self, label: &str, value: &str, palette: &Palette) {
        self.vertical_centered(|ui| {
            ui.label(RichText::new(label).size(10.0).color(palette.card_text));
            ui.label(RichText::new(value).color(palette.card_text));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ThemeMode;

    #[test]
    fn change_color_follows_sign() {
        let palette = ThemeMode::Dark.palette();
        assert_eq!(change_color(1.5, palette), palette.positive);
        assert_eq!(change_color(-0.1, palette), palette.negative);
        assert_eq!(change_color(0.0, palette), palette.text_subdued);
    }
}
