use eframe::egui;

use crate::{
    core::Card,
    gui::theme::Theme,
};

pub struct CardDetail;

impl CardDetail {
    /// Full attribute view for the selected card. Returns true when the
    /// close control (or an outside click) asks for dismissal.
    pub fn show(ctx: &egui::Context, card: &Card, theme: &Theme) -> bool {
        let modal = egui::Modal::new(egui::Id::new("card_detail_modal")).show(ctx, |ui| {
            ui.set_width(620.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&card.name).size(20.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        ui.close();
                    }
                });
            });

            ui.add_space(8.0);

            ui.horizontal_top(|ui| {
                ui.add(
                    egui::Image::new(card.card_images[0].image_url.as_str())
                        .fit_to_exact_size(egui::vec2(280.0, 408.0)),
                );

                ui.add_space(12.0);

                egui::ScrollArea::vertical().max_height(408.0).show(ui, |ui| {
                    ui.vertical(|ui| {
                        Self::attribute_row(ui, theme, "Type", &card.card_type);

                        if let Some(attribute) = &card.attribute {
                            Self::attribute_row(ui, theme, "Attribute", attribute);
                        }

                        if let Some(level) = card.level {
                            Self::attribute_row(ui, theme, "Level/Rank", &level.to_string());
                        }

                        if let Some(atk) = card.atk {
                            Self::attribute_row(ui, theme, "ATK", &atk.to_string());
                        }

                        if let Some(def) = card.def {
                            Self::attribute_row(ui, theme, "DEF", &def.to_string());
                        }

                        Self::attribute_row(ui, theme, "Race", &card.race);

                        ui.label(theme.heading("Description"));
                        ui.label(&card.desc);
                        ui.add_space(6.0);

                        ui.label(theme.heading("Card Market Prices"));
                        let prices = &card.card_prices[0];
                        ui.label(format!("Cardmarket: ${}", prices.cardmarket_price));
                        ui.label(format!("TCGPlayer: ${}", prices.tcgplayer_price));
                        ui.label(format!("eBay: ${}", prices.ebay_price));
                        ui.label(format!("Amazon: ${}", prices.amazon_price));
                    });
                });
            });
        });

        modal.should_close()
    }

    fn attribute_row(ui: &mut egui::Ui, theme: &Theme, label: &str, value: &str) {
        ui.label(theme.heading(label));
        ui.label(value);
        ui.add_space(6.0);
    }
}
