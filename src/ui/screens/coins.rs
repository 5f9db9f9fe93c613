use eframe::egui::{Align, CursorIcon, Image, Layout, RichText, Sense, Ui, vec2};

use crate::{
    app::{NavRequest, NavState},
    config::ApiSettings,
    domain::{CoinSummary, Route},
    ui::{Palette, UI_CONFIG, UI_TEXT},
};

/// One row of the coins list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinLink {
    pub id: String,
    pub name: String,
    pub icon_url: String,
    pub route: Route,
}

impl CoinLink {
    /// Navigation for a click on this row. The name travels along so the coin
    /// page has a title before its own request lands.
    pub fn nav_request(&self) -> NavRequest {
        NavRequest::Push(
            self.route.clone(),
            Some(NavState {
                name: self.name.clone(),
            }),
        )
    }
}

/// The first `limit` coins in API order.
pub fn coin_links(coins: &[CoinSummary], limit: usize, settings: &ApiSettings) -> Vec<CoinLink> {
    coins
        .iter()
        .take(limit)
        .map(|coin| CoinLink {
            id: coin.id.clone(),
            name: coin.name.clone(),
            icon_url: settings.icon_url(&coin.symbol),
            route: Route::coin(coin.id.as_str()),
        })
        .collect()
}

pub(crate) fn render_coins_header(ui: &mut Ui, palette: &Palette) {
    ui.add_space(10.0);
    ui.allocate_ui(vec2(ui.available_width(), UI_CONFIG.layout.header_height), |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(&UI_TEXT.coins_title)
                    .size(UI_CONFIG.layout.title_size)
                    .color(palette.accent),
            );
        });
    });
    ui.add_space(10.0);
}

/// Draw the rows and return the navigation for a clicked one.
pub(crate) fn render_coin_rows(
    ui: &mut Ui,
    links: &[CoinLink],
    palette: &Palette,
) -> Option<NavRequest> {
    let layout = &UI_CONFIG.layout;
    let mut clicked = None;

    for link in links {
        let response = UI_CONFIG
            .row_frame(palette)
            .show(ui, |ui| {
                ui.set_min_size(vec2(ui.available_width(), layout.row_height));
                ui.horizontal_centered(|ui| {
                    ui.add(
                        Image::from_uri(link.icon_url.as_str())
                            .fit_to_exact_size(vec2(layout.icon_size, layout.icon_size)),
                    );
                    ui.add_space(10.0);
                    ui.label(RichText::new(&link.name).color(palette.row_text));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(&UI_TEXT.icon_arrow_right).color(palette.row_text));
                    });
                });
            })
            .response
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        if response.clicked() {
            clicked = Some(link.nav_request());
        }
        ui.add_space(10.0);
    }
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{summaries, summary};

    #[test]
    fn three_coins_link_to_their_pages_in_order() {
        let coins = vec![
            summary("btc-bitcoin", "Bitcoin", "BTC", 1),
            summary("eth-ethereum", "Ethereum", "ETH", 2),
            summary("ltc-litecoin", "Litecoin", "LTC", 3),
        ];
        let links = coin_links(&coins, 100, &ApiSettings::default());

        let paths: Vec<String> = links.iter().map(|l| l.route.path()).collect();
        assert_eq!(paths, ["/btc-bitcoin", "/eth-ethereum", "/ltc-litecoin"]);
        assert_eq!(links[1].name, "Ethereum");
    }

    #[test]
    fn list_is_capped_at_limit() {
        let settings = ApiSettings::default();
        assert_eq!(coin_links(&summaries(250), 100, &settings).len(), 100);
        assert_eq!(coin_links(&summaries(7), 100, &settings).len(), 7);
        assert!(coin_links(&[], 100, &settings).is_empty());

        let links = coin_links(&summaries(250), 100, &settings);
        assert_eq!(links[0].id, "c1-coin1");
        assert_eq!(links[99].id, "c100-coin100");
    }

    #[test]
    fn icon_is_keyed_by_lowercase_symbol() {
        let coins = vec![summary("btc-bitcoin", "Bitcoin", "BTC", 1)];
        let links = coin_links(&coins, 100, &ApiSettings::default());
        assert_eq!(
            links[0].icon_url,
            "https://cryptoicon-api.vercel.app/api/icon/btc"
        );
    }

    #[test]
    fn click_carries_the_coin_name() {
        let coins = vec![summary("btc-bitcoin", "Bitcoin", "BTC", 1)];
        let links = coin_links(&coins, 100, &ApiSettings::default());
        assert_eq!(
            links[0].nav_request(),
            NavRequest::Push(
                Route::coin("btc-bitcoin"),
                Some(NavState {
                    name: "Bitcoin".to_string()
                })
            )
        );
    }
}
