use eframe::egui;

use crate::{
    core::Card,
    gui::theme::Theme,
};

const CELL_WIDTH: f32 = 150.0;
const THUMB_SIZE: egui::Vec2 = egui::vec2(134.0, 196.0);

pub struct CardGrid;

impl CardGrid {
    /// Renders the result grid; returns the clicked card. An empty slice
    /// renders nothing at all.
    pub fn show(ui: &mut egui::Ui, cards: &[Card], theme: &Theme) -> Option<Card> {
        if cards.is_empty() {
            return None;
        }

        let columns = ((ui.available_width() / (CELL_WIDTH + 8.0)).floor() as usize).max(1);
        let mut clicked = None;

        egui::Grid::new("card_grid").num_columns(columns).spacing([8.0, 8.0]).show(ui, |ui| {
            for (index, card) in cards.iter().enumerate() {
                if Self::cell(ui, card, theme) {
                    clicked = Some(card.clone());
                }

                if (index + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });

        clicked
    }

    fn cell(ui: &mut egui::Ui, card: &Card, theme: &Theme) -> bool {
        let frame_response = egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(4))
            .show(ui, |ui| {
                ui.set_width(CELL_WIDTH);
                ui.vertical(|ui| {
                    // Boundary validation guarantees the first image exists.
                    ui.add(
                        egui::Image::new(card.card_images[0].image_url_small.as_str())
                            .fit_to_exact_size(THUMB_SIZE),
                    );

                    ui.label(theme.bold(&card.name));
                    ui.small(&card.card_type);

                    if let (Some(atk), Some(def)) = (card.atk, card.def) {
                        ui.small(format!("ATK: {} / DEF: {}", atk, def));
                    }
                });
            })
            .response;

        ui.interact(frame_response.rect, ui.id().with(card.id), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    }
}
