#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_util;

pub use app::App;
pub use data::{CoinApi, CoinClient, FetchError, PaprikaProvider};
pub use domain::Route;

// CLI argument parsing
use clap::Parser;

use crate::ui::ThemeMode;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base url of the CoinPaprika compatible API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Route to open at start, e.g. /btc-bitcoin/chart
    #[arg(long)]
    pub route: Option<String>,

    /// Initial theme
    #[arg(long, value_enum, default_value_t = ThemeMode::Dark)]
    pub theme: ThemeMode,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_route_and_theme() {
        let args = Cli::try_parse_from([
            "coin-tracker",
            "--route",
            "/btc-bitcoin/chart",
            "--theme",
            "light",
        ])
        .unwrap();
        assert_eq!(args.route.as_deref(), Some("/btc-bitcoin/chart"));
        assert_eq!(args.theme, ThemeMode::Light);
        assert_eq!(args.api_base_url, None);
    }

    #[test]
    fn cli_defaults_to_dark_theme() {
        let args = Cli::try_parse_from(["coin-tracker"]).unwrap();
        assert_eq!(args.theme, ThemeMode::Dark);
    }
}
