mod browser;
mod navigation;
mod pages;
mod root;
mod state;

pub(crate) use browser::BrowserLocation;
pub use navigation::{Location, NavRequest, NavState, Navigator};
pub(crate) use pages::{CoinPage, CoinsPage, PageView};
pub(crate) use state::{Page, PageEnv};

pub use root::App;
