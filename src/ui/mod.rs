mod screens;
mod styles;
mod ui_config;
mod ui_text;
mod utils;

pub use screens::{
    CoinLink, CoinOverview, OverviewItem, PriceMetric, Tone, coin_links, price_changes,
    price_summary,
};
pub(crate) use screens::{
    StatusAction, render_coin_header, render_coin_rows, render_coins_header, render_failure,
    render_loading, render_overview, render_price_chart, render_price_panel, render_tabs,
};

pub(crate) use styles::UiStyleExt;
pub use styles::change_color;

pub use ui_config::{Layout, Palette, ThemeMode, UI_CONFIG, UI_TEXT, UiConfig};
pub use utils::{format_compact_usd, format_pct, format_price, format_supply, format_tooltip_price};
