use eframe::egui::{self, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::error::DashboardError;
use crate::view::cards::MetricCard;

const CARD_HEIGHT: f32 = 72.0;
const CARDS_PER_ROW: usize = 3;

/// Metric cards, three on the first row and the rest below.
pub fn metric_cards(ui: &mut Ui, cards: &Result<Vec<MetricCard>, DashboardError>) {
    let cards = match cards {
        Ok(cards) => cards,
        Err(e) => {
            super::error_label(ui, e);
            return;
        }
    };
    for row in cards.chunks(CARDS_PER_ROW) {
        card_row(ui, row);
        ui.add_space(6.0);
    }
}

fn card_row(ui: &mut Ui, cards: &[MetricCard]) {
    StripBuilder::new(ui)
        .size(Size::exact(CARD_HEIGHT))
        .vertical(|mut strip| {
            strip.strip(|builder| {
                builder
                    .sizes(Size::remainder(), cards.len())
                    .horizontal(|mut strip| {
                        for card in cards {
                            strip.cell(|ui| card_cell(ui, card));
                        }
                    });
            });
        });
}

fn card_cell(ui: &mut Ui, card: &MetricCard) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(card.title).weak());
        ui.label(RichText::new(&card.value).size(26.0).strong());
    });
}
