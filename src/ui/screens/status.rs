use eframe::egui::{RichText, Ui};

use crate::{
    data::FetchError,
    ui::{Palette, UI_TEXT},
};

/// What the user asked for from an error panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusAction {
    Retry,
    BackToList,
}

pub(crate) fn render_loading(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new(text).color(palette.text));
        });
    });
}

/// Error panel. Missing coins offer a way back to the list, anything else a
/// retry.
pub(crate) fn render_failure(
    ui: &mut Ui,
    err: &FetchError,
    palette: &Palette,
) -> Option<StatusAction> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        if err.is_not_found() {
            ui.label(
                RichText::new(&UI_TEXT.error_not_found)
                    .strong()
                    .color(palette.warning),
            );
            ui.add_space(10.0);
            if ui.button(UI_TEXT.button_back_to_list.as_str()).clicked() {
                action = Some(StatusAction::BackToList);
            }
        } else {
            ui.label(
                RichText::new(&UI_TEXT.error_title)
                    .strong()
                    .color(palette.negative),
            );
            ui.label(RichText::new(err.to_string()).small().color(palette.text_subdued));
            ui.add_space(10.0);
            if ui.button(UI_TEXT.button_retry.as_str()).clicked() {
                action = Some(StatusAction::Retry);
            }
        }
    });
    action
}
