//! Keeps the browser URL hash and the tab title in step with the navigator.
//! Natively there is no URL, so everything here is a no-op.

use crate::domain::Route;

#[derive(Default)]
pub(crate) struct BrowserLocation {
    /// Last hash we wrote. Anything else in the address bar came from the user.
    published: Option<String>,
}

impl BrowserLocation {
    /// Path from the URL hash at start-up, e.g. `#/btc-bitcoin/chart`.
    pub(crate) fn initial_path(&mut self) -> Option<String> {
        let hash = read_hash()?;
        self.published = Some(hash.clone());
        Some(hash)
    }

    /// A route typed or navigated to in the browser since the last frame.
    pub(crate) fn poll_external(&mut self) -> Option<Route> {
        let hash = read_hash()?;
        if self.published.as_deref() == Some(hash.as_str()) {
            return None;
        }
        self.published = Some(hash.clone());
        match Route::parse(&hash) {
            Some(route) => Some(route),
            None => {
                log::warn!("Ignoring unknown location '{}'", hash);
                None
            }
        }
    }

    pub(crate) fn publish(&mut self, route: &Route) {
        let hash = format!("#{}", route.path());
        if self.published.as_deref() == Some(hash.as_str()) {
            return;
        }
        write_hash(&hash);
        self.published = Some(hash);
    }

    pub(crate) fn publish_title(&self, title: &str) {
        write_title(title);
    }
}

#[cfg(target_arch = "wasm32")]
fn read_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    // An empty hash is the list.
    Some(if hash.is_empty() { "#/".to_string() } else { hash })
}

#[cfg(target_arch = "wasm32")]
fn write_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_hash(hash) {
            log::warn!("Could not update location hash: {:?}", err);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_hash() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn write_hash(_hash: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn write_title(_title: &str) {}
