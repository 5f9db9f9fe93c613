use eframe::egui::{Ui, Vec2b};
use egui_plot::{Axis, AxisHints, Line, Plot, PlotPoints};

use crate::{
    domain::{HistoryPoint, close_series},
    ui::{ThemeMode, UI_CONFIG, UI_TEXT, format_tooltip_price},
    utils::epoch_secs_to_date_string,
};

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X).formatter(|mark, _range| epoch_secs_to_date_string(mark.value as i64))
}

/// Close price over close time. `points` must be sorted by close time.
pub(crate) fn render_price_chart(ui: &mut Ui, coin_id: &str, points: &[HistoryPoint], theme: ThemeMode) {
    let palette = theme.palette();
    let series = close_series(points);

    Plot::new(("price_chart", coin_id))
        .height(UI_CONFIG.layout.chart_height)
        .custom_x_axes(vec![create_time_axis()])
        .show_axes(Vec2b { x: true, y: false })
        .show_grid(Vec2b { x: false, y: true })
        .label_formatter(|_, point| format_tooltip_price(point.y))
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(UI_TEXT.chart_series_name.as_str(), PlotPoints::new(series))
                    .color(palette.chart_line)
                    .width(4.0),
            );
        });
}
