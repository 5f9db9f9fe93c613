use std::time::Duration;

use eframe::egui::{RichText, Ui};

use crate::{
    app::{NavRequest, PageEnv, PageView},
    config::{DF, QUERY},
    data::{FetchError, QueryState, RefreshTimer, ResourceKind},
    domain::{CoinTab, Route},
    ui::{
        CoinOverview, StatusAction, UI_TEXT, render_coin_header, render_failure, render_loading,
        render_overview, render_price_chart, render_price_panel, render_tabs,
    },
    utils::AppInstant,
};

/// Detail page for one coin. Lives as long as the route points at the same id,
/// so switching tabs keeps it (and its refresh timer) alive.
pub(crate) struct CoinPage {
    coin_id: String,
    refresh: RefreshTimer,
}

impl CoinPage {
    pub(crate) fn new(coin_id: impl Into<String>, now: AppInstant) -> Self {
        let coin_id = coin_id.into();
        if DF.log_refresh {
            log::info!("Mount coin page '{}'", coin_id);
        }
        Self {
            coin_id,
            refresh: RefreshTimer::new(Duration::from_millis(QUERY.ticker_refresh_ms), now),
        }
    }

    pub(crate) fn coin_id(&self) -> &str {
        &self.coin_id
    }

    fn show_chart(&self, ui: &mut Ui, env: &mut PageEnv<'_>) -> Option<NavRequest> {
        let palette = env.theme.palette();
        match env.client.history(&self.coin_id) {
            QueryState::Ready(points) if points.is_empty() => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&UI_TEXT.chart_empty).color(palette.text_subdued));
                });
                None
            }
            QueryState::Ready(points) => {
                render_price_chart(ui, &self.coin_id, &points, env.theme);
                None
            }
            QueryState::Failed(err) => {
                let action = render_failure(ui, &err, palette);
                self.handle_status(action, &[ResourceKind::History], env)
            }
            QueryState::Idle | QueryState::Loading => {
                render_loading(ui, &UI_TEXT.chart_loading, palette);
                None
            }
        }
    }

    fn handle_status(
        &self,
        action: Option<StatusAction>,
        failed: &[ResourceKind],
        env: &mut PageEnv<'_>,
    ) -> Option<NavRequest> {
        match action? {
            StatusAction::Retry => {
                for kind in failed {
                    env.client.retry(*kind, &self.coin_id);
                }
                None
            }
            StatusAction::BackToList => Some(NavRequest::Push(Route::Coins, None)),
        }
    }
}

impl Drop for CoinPage {
    fn drop(&mut self) {
        if DF.log_refresh {
            log::info!("Unmount coin page '{}', ticker refresh stopped", self.coin_id);
        }
    }
}

impl PageView for CoinPage {
    fn sync(&mut self, env: &mut PageEnv<'_>) -> Option<Duration> {
        env.client.coin_info(&self.coin_id);
        env.client.ticker(&self.coin_id);

        if self.refresh.poll(env.now) {
            let dispatched = env.client.refetch_ticker(&self.coin_id);
            if DF.log_refresh {
                log::info!(
                    "Ticker refresh for '{}': {}",
                    self.coin_id,
                    if dispatched { "dispatched" } else { "skipped, still running" }
                );
            }
        }

        let location = env.location;
        if location.route.active_tab() == Some(CoinTab::Chart) {
            env.client.history(&self.coin_id);
        }

        Some(self.refresh.remaining(env.now))
    }

    fn title(&self, env: &mut PageEnv<'_>) -> String {
        if let Some(state) = &env.location.state {
            return state.name.clone();
        }
        let info = env.client.coin_info(&self.coin_id);
        let ticker = env.client.ticker(&self.coin_id);
        if info.is_loading() || ticker.is_loading() {
            return UI_TEXT.loading.clone();
        }
        match info.data() {
            Some(info) => info.name.clone(),
            None => self.coin_id.clone(),
        }
    }

    fn show(&mut self, ui: &mut Ui, env: &mut PageEnv<'_>) -> Option<NavRequest> {
        let palette = env.theme.palette();
        let title = self.title(env);
        render_coin_header(ui, &title, palette);

        let info = env.client.coin_info(&self.coin_id);
        let ticker = env.client.ticker(&self.coin_id);
        match (info, ticker) {
            (QueryState::Ready(info), QueryState::Ready(ticker)) => {
                render_overview(ui, &CoinOverview::new(&info, &ticker), palette);

                let location = env.location;
                let route = &location.route;
                let tab_nav = render_tabs(ui, route, location.state.as_ref(), palette);
                let body_nav = match route.active_tab() {
                    Some(CoinTab::Price) => {
                        render_price_panel(ui, &ticker, palette);
                        None
                    }
                    Some(CoinTab::Chart) => self.show_chart(ui, env),
                    None => None,
                };
                tab_nav.or(body_nav)
            }
            (info, ticker) => {
                let failures = failures([
                    (ResourceKind::Info, info.error()),
                    (ResourceKind::Ticker, ticker.error()),
                ]);
                match failures.first() {
                    Some((_, err)) => {
                        let action = render_failure(ui, err, palette);
                        let kinds: Vec<ResourceKind> = failures.iter().map(|(k, _)| *k).collect();
                        self.handle_status(action, &kinds, env)
                    }
                    None => {
                        render_loading(ui, &UI_TEXT.loading, palette);
                        None
                    }
                }
            }
        }
    }
}

/// Failed resources, NotFound first so a missing coin wins over a flaky ticker.
fn failures<const N: usize>(
    states: [(ResourceKind, Option<&FetchError>); N],
) -> Vec<(ResourceKind, FetchError)> {
    let mut failed: Vec<(ResourceKind, FetchError)> = states
        .into_iter()
        .filter_map(|(kind, err)| err.map(|e| (kind, e.clone())))
        .collect();
    failed.sort_by_key(|(_, err)| !err.is_not_found());
    failed
}
