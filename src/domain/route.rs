use std::fmt;

use strum_macros::{Display, EnumIter};

/// Sub-view of the coin page. Derived from the path, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CoinTab {
    #[strum(to_string = "Price")]
    Price,
    #[strum(to_string = "Chart")]
    Chart,
}

impl CoinTab {
    fn segment(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Chart => "chart",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "price" => Some(Self::Price),
            "chart" => Some(Self::Chart),
            _ => None,
        }
    }
}

/// Every navigable location of the app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// `/`
    #[default]
    Coins,
    /// `/{id}`, `/{id}/price`, `/{id}/chart`
    Coin { id: String, tab: Option<CoinTab> },
}

impl Route {
    pub fn coin(id: impl Into<String>) -> Self {
        Self::Coin {
            id: id.into(),
            tab: None,
        }
    }

    pub fn coin_tab(id: impl Into<String>, tab: CoinTab) -> Self {
        Self::Coin {
            id: id.into(),
            tab: Some(tab),
        }
    }

    /// Parse a path. Unknown shapes yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_start_matches('#');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Coins),
            [id] => Some(Self::coin(*id)),
            [id, tab] => CoinTab::from_segment(tab).map(|tab| Self::coin_tab(*id, tab)),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Coins => "/".to_string(),
            Self::Coin { id, tab: None } => format!("/{}", id),
            Self::Coin { id, tab: Some(tab) } => format!("/{}/{}", id, tab.segment()),
        }
    }

    pub fn coin_id(&self) -> Option<&str> {
        match self {
            Self::Coins => None,
            Self::Coin { id, .. } => Some(id),
        }
    }

    /// The highlighted tab for this location.
    pub fn active_tab(&self) -> Option<CoinTab> {
        match self {
            Self::Coins => None,
            Self::Coin { tab, .. } => *tab,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_shape() {
        assert_eq!(Route::parse("/"), Some(Route::Coins));
        assert_eq!(Route::parse(""), Some(Route::Coins));
        assert_eq!(Route::parse("/btc-bitcoin"), Some(Route::coin("btc-bitcoin")));
        assert_eq!(
            Route::parse("/btc-bitcoin/price"),
            Some(Route::coin_tab("btc-bitcoin", CoinTab::Price))
        );
        assert_eq!(
            Route::parse("#/btc-bitcoin/chart/"),
            Some(Route::coin_tab("btc-bitcoin", CoinTab::Chart))
        );
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert_eq!(Route::parse("/btc-bitcoin/volume"), None);
        assert_eq!(Route::parse("/a/b/c"), None);
    }

    #[test]
    fn path_round_trips_through_parse() {
        for route in [
            Route::Coins,
            Route::coin("eth-ethereum"),
            Route::coin_tab("eth-ethereum", CoinTab::Price),
            Route::coin_tab("eth-ethereum", CoinTab::Chart),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn active_tab_follows_the_path_only() {
        let active = |p: &str| Route::parse(p).and_then(|r| r.active_tab());
        assert_eq!(active("/btc-bitcoin/price"), Some(CoinTab::Price));
        assert_eq!(active("/btc-bitcoin/chart"), Some(CoinTab::Chart));
        assert_eq!(active("/btc-bitcoin"), None);
        assert_eq!(active("/"), None);
    }
}
