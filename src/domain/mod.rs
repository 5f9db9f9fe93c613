mod coin;
mod history;
mod route;
mod ticker;

pub use coin::{CoinInfo, CoinSummary};
pub use history::{HistoryPoint, close_series, sort_by_close_time};
pub use route::{CoinTab, Route};
pub use ticker::{CoinTicker, Quote, Quotes};
