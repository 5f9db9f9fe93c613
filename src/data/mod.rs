mod client;
mod error;
mod provider;
mod query;
mod refresh;
mod task;

pub use {
    client::{CoinClient, ResourceKind},
    error::FetchError,
    provider::{CoinApi, PaprikaProvider},
    query::{QueryCache, QueryState, Ticket},
    refresh::RefreshTimer,
    task::{MaybeSend, MaybeSendSync, TaskFuture, TaskSpawner},
};

#[cfg(not(target_arch = "wasm32"))]
pub use task::TokioSpawner;

#[cfg(target_arch = "wasm32")]
pub use task::LocalSpawner;
