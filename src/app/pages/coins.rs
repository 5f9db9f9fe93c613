use std::{sync::Arc, time::Duration};

use eframe::egui::Ui;

use crate::{
    app::{NavRequest, PageEnv, PageView},
    config::QUERY,
    data::{QueryState, ResourceKind},
    domain::CoinSummary,
    ui::{
        CoinLink, StatusAction, UI_TEXT, coin_links, render_coin_rows, render_coins_header,
        render_failure, render_loading,
    },
};

/// The coins list at `/`.
#[derive(Default)]
pub(crate) struct CoinsPage {
    /// Rows built from the last coin list seen, rebuilt when the list changes.
    links: Option<(Arc<Vec<CoinSummary>>, Vec<CoinLink>)>,
}

impl CoinsPage {
    fn links_for(&mut self, coins: Arc<Vec<CoinSummary>>, env: &PageEnv<'_>) -> &[CoinLink] {
        let stale = match &self.links {
            Some((seen, _)) => !Arc::ptr_eq(seen, &coins),
            None => true,
        };
        if stale {
            let links = coin_links(&coins, QUERY.coin_list_limit, env.settings);
            self.links = Some((coins, links));
        }
        self.links
            .as_ref()
            .map(|(_, links)| links.as_slice())
            .unwrap_or_default()
    }
}

impl PageView for CoinsPage {
    fn sync(&mut self, env: &mut PageEnv<'_>) -> Option<Duration> {
        env.client.coins();
        None
    }

    fn title(&self, _env: &mut PageEnv<'_>) -> String {
        UI_TEXT.coins_title.clone()
    }

    fn show(&mut self, ui: &mut Ui, env: &mut PageEnv<'_>) -> Option<NavRequest> {
        let palette = env.theme.palette();
        render_coins_header(ui, palette);

        match env.client.coins() {
            QueryState::Ready(coins) => {
                let links = self.links_for(coins, env);
                render_coin_rows(ui, links, palette)
            }
            QueryState::Failed(err) => {
                match render_failure(ui, &err, palette) {
                    Some(StatusAction::Retry) => env.client.retry(ResourceKind::Coins, ""),
                    Some(StatusAction::BackToList) | None => {}
                }
                None
            }
            QueryState::Idle | QueryState::Loading => {
                render_loading(ui, &UI_TEXT.loading, palette);
                None
            }
        }
    }
}
