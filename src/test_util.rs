//! In-memory API and a hand-cranked spawner for deterministic tests.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::DateTime;

use crate::{
    app::{Location, PageEnv},
    config::ApiSettings,
    data::{CoinApi, CoinClient, FetchError, ResourceKind, TaskFuture, TaskSpawner},
    domain::{CoinInfo, CoinSummary, CoinTicker, HistoryPoint},
    ui::ThemeMode,
    utils::AppInstant,
};

pub(crate) fn summary(id: &str, name: &str, symbol: &str, rank: u32) -> CoinSummary {
    CoinSummary {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        rank,
        is_new: false,
        is_active: true,
        kind: "coin".to_string(),
    }
}

/// `n` distinct summaries ranked 1..=n.
pub(crate) fn summaries(n: usize) -> Vec<CoinSummary> {
    (1..=n)
        .map(|i| summary(&format!("c{}-coin{}", i, i), &format!("Coin {}", i), &format!("C{}", i), i as u32))
        .collect()
}

pub(crate) fn coin_info(id: &str, name: &str) -> CoinInfo {
    CoinInfo {
        id: id.to_string(),
        name: name.to_string(),
        symbol: name.chars().take(3).collect::<String>().to_uppercase(),
        rank: 1,
        is_active: true,
        kind: "coin".to_string(),
        description: Some(format!("{} is a coin.", name)),
        ..Default::default()
    }
}

pub(crate) fn ticker(id: &str, price: f64) -> CoinTicker {
    let mut ticker = CoinTicker {
        id: id.to_string(),
        total_supply: 19_000_000.0,
        max_supply: 21_000_000.0,
        ..Default::default()
    };
    ticker.quotes.usd.price = price;
    ticker
}

pub(crate) fn history_point(close_secs: i64, close: f64) -> HistoryPoint {
    let close_time = DateTime::from_timestamp(close_secs, 0).unwrap_or_default();
    let open_time = DateTime::from_timestamp(close_secs - 86_399, 0).unwrap_or_default();
    HistoryPoint {
        time_open: open_time,
        time_close: close_time,
        open: close,
        high: close,
        low: close,
        close,
        volume: 1.0,
        market_cap: 1.0,
    }
}

#[derive(Default)]
struct MockState {
    coins: Vec<CoinSummary>,
    infos: HashMap<String, CoinInfo>,
    prices: HashMap<String, f64>,
    ticker_error: Option<FetchError>,
    calls: HashMap<&'static str, usize>,
}

/// Answers immediately from memory and counts calls per resource.
///
/// Coin info is only known for ids added with [`MockApi::with_info`]; other ids
/// fail with `NotFound`. Tickers and history exist for any id.
#[derive(Default)]
pub(crate) struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    pub(crate) fn with_coins(self, coins: Vec<CoinSummary>) -> Self {
        self.lock().coins = coins;
        self
    }

    pub(crate) fn with_info(self, info: CoinInfo) -> Self {
        self.lock().infos.insert(info.id.clone(), info);
        self
    }

    pub(crate) fn set_ticker_price(&self, id: &str, price: f64) {
        self.lock().prices.insert(id.to_string(), price);
    }

    /// Every ticker request fails with `err` until cleared with `None`.
    pub(crate) fn set_ticker_error(&self, err: Option<FetchError>) {
        self.lock().ticker_error = err;
    }

    pub(crate) fn calls(&self, kind: ResourceKind) -> usize {
        let label = call_label(kind);
        self.lock().calls.get(label).copied().unwrap_or(0)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, kind: ResourceKind) {
        *self.lock().calls.entry(call_label(kind)).or_default() += 1;
    }
}

fn call_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Coins => "coins",
        ResourceKind::Info => "info",
        ResourceKind::Ticker => "ticker",
        ResourceKind::History => "history",
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CoinApi for MockApi {
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>, FetchError> {
        self.record(ResourceKind::Coins);
        Ok(self.lock().coins.clone())
    }

    async fn fetch_coin_info(&self, id: &str) -> Result<CoinInfo, FetchError> {
        self.record(ResourceKind::Info);
        self.lock()
            .infos
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(format!("/coins/{}", id)))
    }

    async fn fetch_ticker(&self, id: &str) -> Result<CoinTicker, FetchError> {
        self.record(ResourceKind::Ticker);
        if let Some(err) = self.lock().ticker_error.clone() {
            return Err(err);
        }
        let price = self.lock().prices.get(id).copied().unwrap_or(1.0);
        Ok(ticker(id, price))
    }

    async fn fetch_history(&self, _id: &str) -> Result<Vec<HistoryPoint>, FetchError> {
        self.record(ResourceKind::History);
        Ok((1..=14)
            .map(|day| history_point(1_700_000_000 + day * 86_400, 100.0 + day as f64))
            .collect())
    }
}

/// Queues spawned tasks until the test decides to run them.
#[derive(Clone, Default)]
pub(crate) struct ManualSpawner {
    queue: Rc<RefCell<VecDeque<TaskFuture>>>,
}

impl ManualSpawner {
    pub(crate) fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run queued tasks in dispatch order.
    pub(crate) fn run_all(&self) {
        while let Some(task) = self.take_oldest() {
            futures::executor::block_on(task);
        }
    }

    /// Run only the most recently dispatched task.
    pub(crate) fn run_newest(&self) {
        let task = self.queue.borrow_mut().pop_back();
        if let Some(task) = task {
            futures::executor::block_on(task);
        }
    }

    pub(crate) fn take_oldest(&self) -> Option<TaskFuture> {
        self.queue.borrow_mut().pop_front()
    }
}

impl TaskSpawner for ManualSpawner {
    fn spawn(&self, task: TaskFuture) {
        self.queue.borrow_mut().push_back(task);
    }
}

/// A client wired to a [`MockApi`] and a [`ManualSpawner`], for driving pages.
pub(crate) struct Harness {
    pub(crate) api: Arc<MockApi>,
    pub(crate) spawner: ManualSpawner,
    pub(crate) client: CoinClient,
    pub(crate) settings: ApiSettings,
}

impl Harness {
    pub(crate) fn new(api: MockApi) -> Self {
        let api = Arc::new(api);
        let spawner = ManualSpawner::default();
        let client = CoinClient::new(api.clone(), Box::new(spawner.clone()));
        Self {
            api,
            spawner,
            client,
            settings: ApiSettings::default(),
        }
    }

    pub(crate) fn env<'a>(&'a mut self, location: &'a Location, now: AppInstant) -> PageEnv<'a> {
        PageEnv {
            client: &mut self.client,
            settings: &self.settings,
            theme: ThemeMode::Dark,
            location,
            now,
        }
    }

    /// Finish every queued request and apply the results.
    pub(crate) fn settle(&mut self) {
        self.spawner.run_all();
        self.client.poll();
    }
}
