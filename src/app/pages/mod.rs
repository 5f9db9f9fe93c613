pub(super) mod coin;
pub(super) mod coins;
pub(super) mod page_view;

pub(crate) use coin::CoinPage;
pub(crate) use coins::CoinsPage;
pub(crate) use page_view::PageView;
