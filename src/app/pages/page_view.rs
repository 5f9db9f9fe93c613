use std::time::Duration;

use eframe::egui::Ui;

use crate::app::{NavRequest, PageEnv};

/// One mounted page. The app calls `sync` then `title` then `show` every frame.
pub(crate) trait PageView {
    /// Issue the requests the current location needs. Returns how long until
    /// the page wants to run again without input.
    fn sync(&mut self, env: &mut PageEnv<'_>) -> Option<Duration>;

    fn title(&self, env: &mut PageEnv<'_>) -> String;

    fn show(&mut self, ui: &mut Ui, env: &mut PageEnv<'_>) -> Option<NavRequest>;
}
