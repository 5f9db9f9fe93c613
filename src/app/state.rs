use crate::{
    app::{CoinPage, CoinsPage, Location, PageView},
    config::ApiSettings,
    data::CoinClient,
    domain::Route,
    ui::ThemeMode,
    utils::AppInstant,
};

/// What a page may touch while it syncs and draws.
pub(crate) struct PageEnv<'a> {
    pub(crate) client: &'a mut CoinClient,
    pub(crate) settings: &'a ApiSettings,
    pub(crate) theme: ThemeMode,
    pub(crate) location: &'a Location,
    pub(crate) now: AppInstant,
}

/// The mounted page.
pub(crate) enum Page {
    Coins(CoinsPage),
    Coin(CoinPage),
}

impl Default for Page {
    fn default() -> Self {
        Page::Coins(CoinsPage::default())
    }
}

impl Page {
    pub(crate) fn mount(route: &Route, now: AppInstant) -> Self {
        match route {
            Route::Coins => Page::Coins(CoinsPage::default()),
            Route::Coin { id, .. } => Page::Coin(CoinPage::new(id.as_str(), now)),
        }
    }

    /// Keep the mounted page while the route still shows it. A coin page
    /// survives tab changes but not a change of coin.
    pub(crate) fn reconcile(self, route: &Route, now: AppInstant) -> Self {
        match (self, route) {
            (Page::Coins(page), Route::Coins) => Page::Coins(page),
            (Page::Coin(page), Route::Coin { id, .. }) if page.coin_id() == id => Page::Coin(page),
            (_, route) => Self::mount(route, now),
        }
    }

    pub(crate) fn view_mut(&mut self) -> &mut dyn PageView {
        match self {
            Page::Coins(page) => page,
            Page::Coin(page) => page,
        }
    }

    pub(crate) fn coin_id(&self) -> Option<&str> {
        match self {
            Page::Coins(_) => None,
            Page::Coin(page) => Some(page.coin_id()),
        }
    }
}
