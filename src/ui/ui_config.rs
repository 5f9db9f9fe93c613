use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke, Visuals};
use strum_macros::Display;

pub use crate::ui::ui_text::UI_TEXT;

/// Light or dark look. Owned by the app and handed to every view that draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, clap::ValueEnum)]
pub enum ThemeMode {
    #[default]
    #[strum(to_string = "dark")]
    Dark,
    #[strum(to_string = "light")]
    Light,
}

impl ThemeMode {
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &UI_CONFIG.dark,
            Self::Light => &UI_CONFIG.light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn visuals(self) -> Visuals {
        let palette = self.palette();
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.window_fill = palette.background;
        visuals.panel_fill = palette.background;
        visuals.override_text_color = Some(palette.text);
        visuals.hyperlink_color = palette.accent;
        visuals.widgets.hovered.fg_stroke.color = palette.accent;
        visuals.widgets.active.fg_stroke.color = palette.accent;
        visuals
    }
}

/// Colors for one theme.
#[derive(Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub text: Color32,
    pub text_subdued: Color32,
    pub accent: Color32,
    /// Overview panels and tabs.
    pub card: Color32,
    pub card_text: Color32,
    /// Coin list rows (inverted colors).
    pub row: Color32,
    pub row_text: Color32,
    pub chart_line: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
}

/// Layout constants shared by every screen.
#[derive(Clone, Copy)]
pub struct Layout {
    pub content_max_width: f32,
    pub header_height: f32,
    pub title_size: f32,
    pub row_height: f32,
    pub icon_size: f32,
    pub chart_height: f32,
    pub corner_radius: u8,
}

/// Main UI configuration struct that holds all UI-related settings
pub struct UiConfig {
    pub dark: Palette,
    pub light: Palette,
    pub layout: Layout,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: Palette {
        background: Color32::from_rgb(0x2f, 0x36, 0x40),
        text: Color32::from_rgb(0xf5, 0xf6, 0xfa),
        text_subdued: Color32::GRAY,
        accent: Color32::from_rgb(0x9c, 0x88, 0xff),
        card: Color32::from_black_alpha(153),
        card_text: Color32::from_rgb(0xf5, 0xf6, 0xfa),
        row: Color32::from_rgb(0xf5, 0xf6, 0xfa),
        row_text: Color32::from_rgb(0x2f, 0x36, 0x40),
        chart_line: Color32::from_rgb(0x0f, 0xbc, 0xf9),
        positive: Color32::from_rgb(0x4c, 0xd1, 0x37),
        negative: Color32::from_rgb(0xe8, 0x41, 0x18),
        warning: Color32::from_rgb(0xfb, 0xc5, 0x31),
    },
    light: Palette {
        background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
        text: Color32::BLACK,
        text_subdued: Color32::DARK_GRAY,
        accent: Color32::from_rgb(0x9c, 0x88, 0xff),
        card: Color32::from_black_alpha(153),
        card_text: Color32::WHITE,
        row: Color32::WHITE,
        row_text: Color32::BLACK,
        chart_line: Color32::from_rgb(0x00, 0x97, 0xe6),
        positive: Color32::from_rgb(0x44, 0xbd, 0x32),
        negative: Color32::from_rgb(0xc2, 0x36, 0x16),
        warning: Color32::from_rgb(0xe1, 0xb1, 0x2c),
    },
    layout: Layout {
        content_max_width: 480.0,
        header_height: 64.0,
        title_size: 30.0,
        row_height: 50.0,
        icon_size: 25.0,
        chart_height: 320.0,
        corner_radius: 5,
    },
};

impl UiConfig {
    /// Frame for overview panels and tabs.
    pub fn card_frame(&self, palette: &Palette) -> Frame {
        Frame {
            fill: palette.card,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(20, 10),
            corner_radius: CornerRadius::same(self.layout.corner_radius),
            ..Default::default()
        }
    }

    /// Frame for one coin row on the list.
    pub fn row_frame(&self, palette: &Palette) -> Frame {
        Frame {
            fill: palette.row,
            stroke: Stroke::NONE,
            inner_margin: Margin {
                left: 10,
                right: 10,
                top: 0,
                bottom: 0,
            },
            corner_radius: CornerRadius::same(self.layout.corner_radius),
            ..Default::default()
        }
    }

    /// Frame for the top toolbar.
    pub fn top_panel_frame(&self, palette: &Palette) -> Frame {
        Frame {
            fill: palette.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the page body.
    pub fn central_panel_frame(&self, palette: &Palette) -> Frame {
        Frame {
            fill: palette.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(20, 0),
            ..Default::default()
        }
    }
}
