use std::{mem, sync::Arc};

use anyhow::Result;
use eframe::{
    Frame,
    egui::{
        Align, Button, CentralPanel, Context, Key, Layout, ScrollArea, TopBottomPanel,
        ViewportCommand,
    },
};

use crate::{
    Cli,
    app::{BrowserLocation, NavRequest, Navigator, Page, PageEnv},
    config::{ApiSettings, DF},
    data::{CoinApi, CoinClient, PaprikaProvider, ResourceKind, TaskSpawner},
    domain::Route,
    ui::{ThemeMode, UI_CONFIG, UI_TEXT, UiStyleExt},
    utils::AppInstant,
};

#[cfg(not(target_arch = "wasm32"))]
use crate::data::TokioSpawner;

#[cfg(target_arch = "wasm32")]
use crate::data::LocalSpawner;

pub struct App {
    client: CoinClient,
    settings: ApiSettings,
    theme: ThemeMode,
    navigator: Navigator,
    page: Page,
    browser: BrowserLocation,
    window_title: String,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings = ApiSettings::from_cli(&args)?;
        let api: Arc<dyn CoinApi> = Arc::new(PaprikaProvider::new(&settings)?);

        #[cfg(not(target_arch = "wasm32"))]
        let spawner: Box<dyn TaskSpawner> = Box::new(TokioSpawner::new()?);
        #[cfg(target_arch = "wasm32")]
        let spawner: Box<dyn TaskSpawner> = Box::new(LocalSpawner);

        let client = CoinClient::new(api, spawner).with_repaint(cc.egui_ctx.clone());

        let mut browser = BrowserLocation::default();
        let navigator = match browser.initial_path().or(args.route) {
            Some(path) => Navigator::from_path(&path),
            None => Navigator::default(),
        };
        log::info!(
            "Starting at {} against {} ({} theme)",
            navigator.route(),
            settings.base_url,
            args.theme
        );

        let page = Page::mount(navigator.route(), AppInstant::now());
        Ok(Self {
            client,
            settings,
            theme: args.theme,
            navigator,
            page,
            browser,
            window_title: String::new(),
        })
    }

    fn handle_global_shortcuts(&self, ctx: &Context) -> Option<NavRequest> {
        if ctx.wants_keyboard_input() {
            return None;
        }
        ctx.input(|i| {
            if !i.modifiers.alt {
                None
            } else if i.key_pressed(Key::ArrowLeft) {
                Some(NavRequest::Back)
            } else if i.key_pressed(Key::ArrowRight) {
                Some(NavRequest::Forward)
            } else {
                None
            }
        })
    }

    fn render_top_panel(&mut self, ctx: &Context) -> Option<NavRequest> {
        let palette = self.theme.palette();
        let refreshing = self.is_refreshing();
        let mut request = None;

        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame(palette))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let back = ui
                        .add_enabled(
                            self.navigator.can_go_back(),
                            Button::new(UI_TEXT.icon_back.as_str()),
                        )
                        .on_hover_text(UI_TEXT.hover_back.as_str());
                    if back.clicked() {
                        request = Some(NavRequest::Back);
                    }
                    let forward = ui
                        .add_enabled(
                            self.navigator.can_go_forward(),
                            Button::new(UI_TEXT.icon_forward.as_str()),
                        )
                        .on_hover_text(UI_TEXT.hover_forward.as_str());
                    if forward.clicked() {
                        request = Some(NavRequest::Forward);
                    }
                    if ui
                        .button(UI_TEXT.icon_home.as_str())
                        .on_hover_text(UI_TEXT.hover_home.as_str())
                        .clicked()
                    {
                        request = Some(NavRequest::Push(Route::Coins, None));
                    }
                    ui.label_subdued(self.navigator.route().path(), palette);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let label = if self.theme.is_dark() {
                            &UI_TEXT.theme_to_light
                        } else {
                            &UI_TEXT.theme_to_dark
                        };
                        if ui.button(label.as_str()).clicked() {
                            self.theme = self.theme.toggled();
                            log::info!("Theme switched to {}", self.theme);
                        }
                        if refreshing {
                            ui.spinner().on_hover_text(UI_TEXT.refreshing.as_str());
                        }
                    });
                });
            });
        request
    }

    /// A background ticker refresh is running for the mounted coin.
    fn is_refreshing(&self) -> bool {
        self.page
            .coin_id()
            .is_some_and(|id| self.client.is_fetching(ResourceKind::Ticker, id))
    }

    /// Mount, sync and draw the page for the current route.
    fn render_page(&mut self, ctx: &Context) -> Option<NavRequest> {
        let now = AppInstant::now();
        let current = mem::take(&mut self.page);
        self.page = current.reconcile(self.navigator.route(), now);

        let palette = self.theme.palette();
        let mut env = PageEnv {
            client: &mut self.client,
            settings: &self.settings,
            theme: self.theme,
            location: self.navigator.current(),
            now,
        };
        let view = self.page.view_mut();
        if let Some(wait) = view.sync(&mut env) {
            ctx.request_repaint_after(wait);
        }
        let title = view.title(&mut env);

        let mut request = None;
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame(palette))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.layout.content_max_width);
                        request = view.show(ui, &mut env);
                    });
                });
            });

        self.update_title(ctx, title);
        request
    }

    fn update_title(&mut self, ctx: &Context, title: String) {
        if title == self.window_title {
            return;
        }
        ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
        self.browser.publish_title(&title);
        self.window_title = title;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.set_visuals(self.theme.visuals());
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        let applied = self.client.poll();
        if applied > 0 && DF.log_cache {
            log::info!("Applied {} fetch results", applied);
        }

        if let Some(route) = self.browser.poll_external() {
            self.navigator.follow_external(route);
        }

        let shortcut = self.handle_global_shortcuts(ctx);
        let toolbar = self.render_top_panel(ctx);
        let from_page = self.render_page(ctx);

        if let Some(request) = shortcut.or(toolbar).or(from_page) {
            self.navigator.apply(request);
            ctx.request_repaint();
        }
        self.browser.publish(self.navigator.route());
    }
}
