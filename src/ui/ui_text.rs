use std::sync::LazyLock;

pub const ICON_ARROW_RIGHT: &str = "\u{2192}";
pub const ICON_BACK: &str = "\u{2190}";
pub const ICON_FORWARD: &str = "\u{2192}";
pub const ICON_HOME: &str = "\u{2302}";
pub const ICON_REFRESH: &str = "\u{27f3}";

pub struct UiText {
    // --- Coins list ---
    pub coins_title: String,
    pub loading: String,
    pub icon_arrow_right: String,

    // --- Coin page ---
    pub label_rank: String,
    pub label_symbol: String,
    pub label_total_supply: String,
    pub label_max_supply: String,
    pub label_unlimited: String,
    pub no_description: String,
    pub refreshing: String,

    // --- Price tab ---
    pub label_price: String,
    pub label_ath: String,
    pub label_from_ath: String,
    pub label_market_cap: String,
    pub label_volume_24h: String,
    pub label_change: String,
    pub label_last_updated: String,

    // --- Chart tab ---
    pub chart_loading: String,
    pub chart_empty: String,
    pub chart_series_name: String,

    // --- Errors ---
    pub error_title: String,
    pub error_not_found: String,
    pub button_retry: String,
    pub button_back_to_list: String,

    // --- Toolbar ---
    pub icon_back: String,
    pub icon_forward: String,
    pub icon_home: String,
    pub hover_back: String,
    pub hover_forward: String,
    pub hover_home: String,
    pub theme_to_light: String,
    pub theme_to_dark: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    coins_title: "Coins List".to_string(),
    loading: "Loading...".to_string(),
    icon_arrow_right: ICON_ARROW_RIGHT.to_string(),

    label_rank: "RANK".to_string(),
    label_symbol: "SYMBOL".to_string(),
    label_total_supply: "TOTAL SUPPLY".to_string(),
    label_max_supply: "MAX SUPPLY".to_string(),
    label_unlimited: "Unlimited".to_string(),
    no_description: "No description provided".to_string(),
    refreshing: "Updating prices".to_string(),

    label_price: "Price".to_string(),
    label_ath: "All-time high".to_string(),
    label_from_ath: "From ATH".to_string(),
    label_market_cap: "Market cap".to_string(),
    label_volume_24h: "Volume (24h)".to_string(),
    label_change: "Change".to_string(),
    label_last_updated: "Last updated".to_string(),

    chart_loading: "Loading Chart...".to_string(),
    chart_empty: "No price history".to_string(),
    chart_series_name: "price".to_string(),

    error_title: "Could not load data".to_string(),
    error_not_found: "Coin not found".to_string(),
    button_retry: format!("{} Retry", ICON_REFRESH),
    button_back_to_list: format!("{} Back to list", ICON_BACK),

    icon_back: ICON_BACK.to_string(),
    icon_forward: ICON_FORWARD.to_string(),
    icon_home: ICON_HOME.to_string(),
    hover_back: "Back (Alt+Left)".to_string(),
    hover_forward: "Forward (Alt+Right)".to_string(),
    hover_home: "Coins list".to_string(),
    theme_to_light: "Light mode".to_string(),
    theme_to_dark: "Dark mode".to_string(),
});
