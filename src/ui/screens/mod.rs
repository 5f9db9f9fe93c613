mod chart;
mod coin;
mod coins;
mod price;
mod status;

pub(crate) use chart::render_price_chart;
pub(crate) use coin::{render_coin_header, render_overview, render_tabs};
pub use coin::{CoinOverview, OverviewItem};
pub(crate) use coins::{render_coin_rows, render_coins_header};
pub use coins::{CoinLink, coin_links};
pub(crate) use price::render_price_panel;
pub use price::{PriceMetric, Tone, price_changes, price_summary};
pub(crate) use status::{StatusAction, render_failure, render_loading};
