use eframe::egui::{Grid, RichText, Ui};

use crate::{
    domain::CoinTicker,
    ui::{
        Palette, UI_CONFIG, UI_TEXT, UiStyleExt, change_color, format_compact_usd, format_pct,
        format_price,
    },
    utils::{format_date, format_datetime},
};

/// How a metric value should be colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Plain,
    Change(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceMetric {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl PriceMetric {
    fn plain(label: impl Into<String>, value: String) -> Self {
        Self {
            label: label.into(),
            value,
            tone: Tone::Plain,
        }
    }

    fn change(label: impl Into<String>, pct: f64) -> Self {
        Self {
            label: label.into(),
            value: format_pct(pct),
            tone: Tone::Change(pct),
        }
    }
}

/// Headline figures of the live quote.
pub fn price_summary(ticker: &CoinTicker) -> Vec<PriceMetric> {
    let quote = ticker.quote();
    let mut metrics = vec![PriceMetric::plain(
        UI_TEXT.label_price.as_str(),
        format_price(quote.price),
    )];

    if let Some(ath) = quote.ath_price {
        let value = match &quote.ath_date {
            Some(date) => format!("{} ({})", format_price(ath), format_date(date)),
            None => format_price(ath),
        };
        metrics.push(PriceMetric::plain(UI_TEXT.label_ath.as_str(), value));
    }
    if let Some(pct) = quote.percent_from_price_ath {
        metrics.push(PriceMetric::change(UI_TEXT.label_from_ath.as_str(), pct));
    }

    metrics.push(PriceMetric::plain(
        UI_TEXT.label_market_cap.as_str(),
        format!(
            "{} ({})",
            format_compact_usd(quote.market_cap),
            format_pct(quote.market_cap_change_24h)
        ),
    ));
    metrics.push(PriceMetric::plain(
        UI_TEXT.label_volume_24h.as_str(),
        format!(
            "{} ({})",
            format_compact_usd(quote.volume_24h),
            format_pct(quote.volume_24h_change_24h)
        ),
    ));
    metrics
}

/// Percent change per window, shortest window first.
pub fn price_changes(ticker: &CoinTicker) -> Vec<PriceMetric> {
    ticker
        .quote()
        .changes()
        .iter()
        .map(|(window, pct)| PriceMetric::change(*window, *pct))
        .collect()
}

fn metric_color(tone: Tone, palette: &Palette) -> eframe::egui::Color32 {
    match tone {
        Tone::Plain => palette.card_text,
        Tone::Change(pct) => change_color(pct, palette),
    }
}

pub(crate) fn render_price_panel(ui: &mut Ui, ticker: &CoinTicker, palette: &Palette) {
    UI_CONFIG.card_frame(palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        for metric in price_summary(ticker) {
            ui.metric(
                &metric.label,
                &metric.value,
                metric_color(metric.tone, palette),
                palette,
            );
        }
    });
    ui.add_space(10.0);

    UI_CONFIG.card_frame(palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(&UI_TEXT.label_change).strong().color(palette.card_text));
        ui.add_space(4.0);
        Grid::new("price_changes_grid")
            .num_columns(3)
            .spacing([30.0, 6.0])
            .show(ui, |ui| {
                for (i, metric) in price_changes(ticker).iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.label_subdued(&metric.label, palette);
                        ui.label(
                            RichText::new(&metric.value).color(metric_color(metric.tone, palette)),
                        );
                    });
                    if (i + 1) % 3 == 0 {
                        ui.end_row();
                    }
                }
            });
    });

    if let Some(updated) = &ticker.last_updated {
        ui.add_space(6.0);
        ui.label_subdued(
            format!("{}: {}", UI_TEXT.label_last_updated, format_datetime(updated)),
            palette,
        );
    }
}
