use std::{
    future::Future,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
};

use eframe::egui::Context;
use strum_macros::Display;

use crate::{
    config::DF,
    data::{
        CoinApi, FetchError, MaybeSend, QueryCache, QueryState, TaskSpawner, Ticket,
    },
    domain::{CoinInfo, CoinSummary, CoinTicker, HistoryPoint},
};

/// The four remote resources, used for retries and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResourceKind {
    #[strum(to_string = "coins")]
    Coins,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "ticker")]
    Ticker,
    #[strum(to_string = "ohlcv")]
    History,
}

/// A finished request on its way back to the UI thread.
enum FetchOutcome {
    Coins(Ticket<()>, Result<Vec<CoinSummary>, FetchError>),
    Info(Ticket<String>, Result<CoinInfo, FetchError>),
    Ticker(Ticket<String>, Result<CoinTicker, FetchError>),
    History(Ticket<String>, Result<Vec<HistoryPoint>, FetchError>),
}

/// Everything needed to launch a request, split from the caches so both can
/// be borrowed at once.
struct Dispatcher {
    api: Arc<dyn CoinApi>,
    spawner: Box<dyn TaskSpawner>,
    tx: Sender<FetchOutcome>,
    repaint: Option<Context>,
}

impl Dispatcher {
    fn run<K, T, Fut>(
        &self,
        ticket: Ticket<K>,
        fetch: Fut,
        wrap: fn(Ticket<K>, Result<T, FetchError>) -> FetchOutcome,
    ) where
        K: MaybeSend + 'static,
        T: MaybeSend + 'static,
        Fut: Future<Output = Result<T, FetchError>> + MaybeSend + 'static,
    {
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        self.spawner.spawn(Box::pin(async move {
            let result = fetch.await;
            if tx.send(wrap(ticket, result)).is_err() {
                log::debug!("Fetch finished after the client was dropped");
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        }));
    }
}

/// Cached, de-duplicated access to the coin API.
///
/// Requests are dispatched from the UI thread and their results are applied
/// in [`CoinClient::poll`], also on the UI thread, so the caches need no locks.
pub struct CoinClient {
    dispatcher: Dispatcher,
    rx: Receiver<FetchOutcome>,
    coins: QueryCache<(), Vec<CoinSummary>>,
    info: QueryCache<String, CoinInfo>,
    tickers: QueryCache<String, CoinTicker>,
    history: QueryCache<String, Vec<HistoryPoint>>,
}

impl CoinClient {
    pub fn new(api: Arc<dyn CoinApi>, spawner: Box<dyn TaskSpawner>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            dispatcher: Dispatcher {
                api,
                spawner,
                tx,
                repaint: None,
            },
            rx,
            coins: QueryCache::new(),
            info: QueryCache::new(),
            tickers: QueryCache::new(),
            history: QueryCache::new(),
        }
    }

    /// Wake the UI whenever a request completes.
    pub fn with_repaint(mut self, ctx: Context) -> Self {
        self.dispatcher.repaint = Some(ctx);
        self
    }

    /// Apply every finished request. Returns how many results were accepted.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.rx.try_recv() {
            let accepted = match outcome {
                FetchOutcome::Coins(ticket, result) => {
                    apply(&mut self.coins, ResourceKind::Coins, "all", ticket, result)
                }
                FetchOutcome::Info(ticket, result) => {
                    let id = ticket.key.clone();
                    apply(&mut self.info, ResourceKind::Info, &id, ticket, result)
                }
                FetchOutcome::Ticker(ticket, result) => {
                    let id = ticket.key.clone();
                    apply(&mut self.tickers, ResourceKind::Ticker, &id, ticket, result)
                }
                FetchOutcome::History(ticket, result) => {
                    let id = ticket.key.clone();
                    apply(&mut self.history, ResourceKind::History, &id, ticket, result)
                }
            };
            if accepted {
                applied += 1;
            }
        }
        applied
    }

    pub fn coins(&mut self) -> QueryState<Vec<CoinSummary>> {
        if self.coins.needs_fetch(&()) {
            self.dispatch_coins();
        }
        self.coins.state(&())
    }

    pub fn coin_info(&mut self, id: &str) -> QueryState<CoinInfo> {
        let key = id.to_string();
        if self.info.needs_fetch(&key) {
            self.dispatch_info(&key);
        }
        self.info.state(&key)
    }

    pub fn ticker(&mut self, id: &str) -> QueryState<CoinTicker> {
        let key = id.to_string();
        if self.tickers.needs_fetch(&key) {
            self.dispatch_ticker(&key);
        }
        self.tickers.state(&key)
    }

    pub fn history(&mut self, id: &str) -> QueryState<Vec<HistoryPoint>> {
        let key = id.to_string();
        if self.history.needs_fetch(&key) {
            self.dispatch_history(&key);
        }
        self.history.state(&key)
    }

    /// Periodic ticker refresh. Skipped while a ticker request for `id` is
    /// still running, and for a failed ticker with nothing to show: that one
    /// waits for [`CoinClient::retry`].
    pub fn refetch_ticker(&mut self, id: &str) -> bool {
        let key = id.to_string();
        if self.tickers.is_fetching(&key) {
            return false;
        }
        if let QueryState::Failed(_) = self.tickers.state(&key) {
            return false;
        }
        self.tickers.invalidate(&key);
        self.dispatch_ticker(&key);
        true
    }

    pub fn is_fetching(&self, kind: ResourceKind, id: &str) -> bool {
        let key = id.to_string();
        match kind {
            ResourceKind::Coins => self.coins.is_fetching(&()),
            ResourceKind::Info => self.info.is_fetching(&key),
            ResourceKind::Ticker => self.tickers.is_fetching(&key),
            ResourceKind::History => self.history.is_fetching(&key),
        }
    }

    /// Request one resource again, superseding anything still in flight.
    /// `id` is ignored for the coin list.
    pub fn retry(&mut self, kind: ResourceKind, id: &str) {
        let key = id.to_string();
        log::info!("Retrying {} for '{}'", kind, id);
        match kind {
            ResourceKind::Coins => {
                self.coins.invalidate(&());
                self.dispatch_coins();
            }
            ResourceKind::Info => {
                self.info.invalidate(&key);
                self.dispatch_info(&key);
            }
            ResourceKind::Ticker => {
                self.tickers.invalidate(&key);
                self.dispatch_ticker(&key);
            }
            ResourceKind::History => {
                self.history.invalidate(&key);
                self.dispatch_history(&key);
            }
        }
    }

    fn dispatch_coins(&mut self) {
        let ticket = self.coins.begin(&());
        log_dispatch(ResourceKind::Coins, "all", ticket.generation);
        let api = Arc::clone(&self.dispatcher.api);
        self.dispatcher
            .run(ticket, async move { api.fetch_coins().await }, FetchOutcome::Coins);
    }

    fn dispatch_info(&mut self, key: &String) {
        let ticket = self.info.begin(key);
        log_dispatch(ResourceKind::Info, key, ticket.generation);
        let api = Arc::clone(&self.dispatcher.api);
        let id = key.clone();
        self.dispatcher.run(
            ticket,
            async move { api.fetch_coin_info(&id).await },
            FetchOutcome::Info,
        );
    }

    fn dispatch_ticker(&mut self, key: &String) {
        let ticket = self.tickers.begin(key);
        log_dispatch(ResourceKind::Ticker, key, ticket.generation);
        let api = Arc::clone(&self.dispatcher.api);
        let id = key.clone();
        self.dispatcher.run(
            ticket,
            async move { api.fetch_ticker(&id).await },
            FetchOutcome::Ticker,
        );
    }

    fn dispatch_history(&mut self, key: &String) {
        let ticket = self.history.begin(key);
        log_dispatch(ResourceKind::History, key, ticket.generation);
        let api = Arc::clone(&self.dispatcher.api);
        let id = key.clone();
        self.dispatcher.run(
            ticket,
            async move { api.fetch_history(&id).await },
            FetchOutcome::History,
        );
    }
}

fn log_dispatch(kind: ResourceKind, id: &str, generation: u64) {
    if DF.log_fetches {
        log::info!("Dispatch {} '{}' (gen {})", kind, id, generation);
    }
}

fn apply<K, T>(
    cache: &mut QueryCache<K, T>,
    kind: ResourceKind,
    id: &str,
    ticket: Ticket<K>,
    result: Result<T, FetchError>,
) -> bool
where
    K: Eq + std::hash::Hash + Clone,
{
    let generation = ticket.generation;
    let failure = result.as_ref().err().cloned();
    let accepted = cache.resolve(ticket, result);

    if !accepted {
        if DF.log_cache {
            log::info!("Discarded superseded {} '{}' (gen {})", kind, id, generation);
        }
        return false;
    }
    if let Some(err) = failure {
        log::warn!("Fetching {} '{}' failed: {}", kind, id, err);
    } else if DF.log_cache {
        log::info!("Cached {} '{}' (gen {})", kind, id, generation);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{ManualSpawner, MockApi, coin_info, summaries};

    fn client_with(api: Arc<MockApi>) -> (CoinClient, ManualSpawner) {
        let spawner = ManualSpawner::default();
        let client = CoinClient::new(api, Box::new(spawner.clone()));
        (client, spawner)
    }

    #[test]
    fn coins_load_once_and_stay_cached() {
        let api = Arc::new(MockApi::default().with_coins(summaries(3)));
        let (mut client, spawner) = client_with(api.clone());

        assert_eq!(client.coins(), QueryState::Loading);
        assert_eq!(client.coins(), QueryState::Loading);
        spawner.run_all();
        assert_eq!(client.poll(), 1);

        let coins = client.coins();
        assert_eq!(coins.data().map(|c| c.len()), Some(3));
        assert_eq!(api.calls(ResourceKind::Coins), 1);
        assert_eq!(spawner.pending(), 0);
    }

    #[test]
    fn same_id_shares_one_request() {
        let api = Arc::new(MockApi::default().with_info(coin_info("btc-bitcoin", "Bitcoin")));
        let (mut client, spawner) = client_with(api.clone());

        client.coin_info("btc-bitcoin");
        client.coin_info("btc-bitcoin");
        spawner.run_all();
        client.poll();
        client.coin_info("btc-bitcoin");

        assert_eq!(api.calls(ResourceKind::Info), 1);
    }

    #[test]
    fn late_response_for_previous_id_lands_in_its_own_entry() {
        let api = Arc::new(
            MockApi::default()
                .with_info(coin_info("btc-bitcoin", "Bitcoin"))
                .with_info(coin_info("eth-ethereum", "Ethereum")),
        );
        let (mut client, spawner) = client_with(api);

        client.coin_info("btc-bitcoin");
        client.coin_info("eth-ethereum");
        // Ethereum answers first, Bitcoin straggles in afterwards.
        spawner.run_newest();
        client.poll();
        spawner.run_all();
        client.poll();

        let eth = client.coin_info("eth-ethereum");
        assert_eq!(eth.data().map(|i| i.name.as_str()), Some("Ethereum"));
        let btc = client.coin_info("btc-bitcoin");
        assert_eq!(btc.data().map(|i| i.name.as_str()), Some("Bitcoin"));
    }

    #[test]
    fn older_refresh_arriving_last_is_ignored() {
        let api = Arc::new(MockApi::default());
        let (mut client, spawner) = client_with(api.clone());

        client.ticker("btc-bitcoin");
        spawner.run_all();
        client.poll();

        // Two refreshes in flight: the newer one finishes first.
        client.retry(ResourceKind::Ticker, "btc-bitcoin");
        let older = spawner.take_oldest().expect("first refresh queued");
        client.retry(ResourceKind::Ticker, "btc-bitcoin");
        api.set_ticker_price("btc-bitcoin", 200.0);
        spawner.run_all();
        assert_eq!(client.poll(), 1);

        api.set_ticker_price("btc-bitcoin", 100.0);
        futures::executor::block_on(older);
        assert_eq!(client.poll(), 0);

        let ticker = client.ticker("btc-bitcoin");
        assert_eq!(ticker.data().map(|t| t.quote().price), Some(200.0));
    }

    #[test]
    fn failure_surfaces_as_failed_until_retried() {
        let api = Arc::new(MockApi::default());
        let (mut client, spawner) = client_with(api.clone());

        client.coin_info("nope-nope");
        spawner.run_all();
        client.poll();
        assert!(matches!(
            client.coin_info("nope-nope"),
            QueryState::Failed(FetchError::NotFound(_))
        ));
        assert_eq!(api.calls(ResourceKind::Info), 1);

        client.retry(ResourceKind::Info, "nope-nope");
        assert_eq!(client.coin_info("nope-nope"), QueryState::Loading);
        assert_eq!(api.calls(ResourceKind::Info), 1);
        spawner.run_all();
        assert_eq!(api.calls(ResourceKind::Info), 2);
    }

    #[test]
    fn refetch_is_skipped_while_a_ticker_request_runs() {
        let api = Arc::new(MockApi::default());
        let (mut client, spawner) = client_with(api);

        client.ticker("btc-bitcoin");
        assert!(!client.refetch_ticker("btc-bitcoin"));
        spawner.run_all();
        client.poll();
        assert!(client.refetch_ticker("btc-bitcoin"));
        assert!(client.is_fetching(ResourceKind::Ticker, "btc-bitcoin"));
    }

    #[test]
    fn refetch_leaves_a_failed_ticker_alone() {
        let api = Arc::new(MockApi::default());
        api.set_ticker_error(Some(FetchError::NotFound("/tickers/x-coin".into())));
        let (mut client, spawner) = client_with(api.clone());

        client.ticker("x-coin");
        spawner.run_all();
        client.poll();
        assert!(!client.refetch_ticker("x-coin"));
        assert_eq!(spawner.pending(), 0);
        assert_eq!(
            client.ticker("x-coin"),
            QueryState::Failed(FetchError::NotFound("/tickers/x-coin".into()))
        );
        assert_eq!(api.calls(ResourceKind::Ticker), 1);
    }

    #[test]
    fn refresh_keeps_showing_previous_ticker() {
        let api = Arc::new(MockApi::default());
        let (mut client, spawner) = client_with(api);

        client.ticker("btc-bitcoin");
        spawner.run_all();
        client.poll();
        client.refetch_ticker("btc-bitcoin");

        assert!(matches!(client.ticker("btc-bitcoin"), QueryState::Ready(_)));
    }
}
