use eframe::egui::{Label, RichText, Ui, vec2};
use strum::IntoEnumIterator;

use crate::{
    app::{NavRequest, NavState},
    domain::{CoinInfo, CoinTab, CoinTicker, Route},
    ui::{Palette, UI_CONFIG, UI_TEXT, UiStyleExt, format_supply},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewItem {
    pub label: String,
    pub value: String,
}

impl OverviewItem {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Everything shown between the title and the tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinOverview {
    pub identity: [OverviewItem; 2],
    pub description: String,
    pub supply: [OverviewItem; 2],
}

impl CoinOverview {
    pub fn new(info: &CoinInfo, ticker: &CoinTicker) -> Self {
        let max_supply = if ticker.has_max_supply() {
            format_supply(ticker.max_supply)
        } else {
            UI_TEXT.label_unlimited.clone()
        };
        Self {
            identity: [
                OverviewItem::new(&UI_TEXT.label_rank, info.rank.to_string()),
                OverviewItem::new(&UI_TEXT.label_symbol, info.symbol.clone()),
            ],
            description: info
                .description()
                .map(str::to_string)
                .unwrap_or_else(|| UI_TEXT.no_description.clone()),
            supply: [
                OverviewItem::new(&UI_TEXT.label_total_supply, format_supply(ticker.total_supply)),
                OverviewItem::new(&UI_TEXT.label_max_supply, max_supply),
            ],
        }
    }
}

pub(crate) fn render_coin_header(ui: &mut Ui, title: &str, palette: &Palette) {
    ui.add_space(10.0);
    ui.allocate_ui(vec2(ui.available_width(), UI_CONFIG.layout.header_height), |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(title)
                    .size(UI_CONFIG.layout.title_size)
                    .color(palette.accent),
            );
        });
    });
    ui.add_space(10.0);
}

pub(crate) fn render_overview(ui: &mut Ui, overview: &CoinOverview, palette: &Palette) {
    render_overview_row(ui, &overview.identity, palette);
    ui.add_space(20.0);
    ui.add(Label::new(RichText::new(&overview.description).color(palette.text)).wrap());
    ui.add_space(20.0);
    render_overview_row(ui, &overview.supply, palette);
    ui.add_space(20.0);
}

fn render_overview_row(ui: &mut Ui, items: &[OverviewItem], palette: &Palette) {
    UI_CONFIG.card_frame(palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.columns(items.len(), |columns| {
            for (column, item) in columns.iter_mut().zip(items) {
                column.overview_item(&item.label, &item.value, palette);
            }
        });
    });
}

/// Tab strip. The highlighted tab comes from the route alone.
pub(crate) fn render_tabs(
    ui: &mut Ui,
    route: &Route,
    nav_state: Option<&NavState>,
    palette: &Palette,
) -> Option<NavRequest> {
    let id = route.coin_id()?;
    let active = route.active_tab();
    let mut request = None;

    ui.columns(2, |columns| {
        for (column, tab) in columns.iter_mut().zip(CoinTab::iter()) {
            let width = column.available_width();
            let response = column.tab_button(&tab.to_string(), active == Some(tab), palette, width);
            if response.clicked() {
                request = Some(NavRequest::Push(Route::coin_tab(id, tab), nav_state.cloned()));
            }
        }
    });
    ui.add_space(20.0);
    request
}
