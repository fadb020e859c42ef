use eframe::egui;

use crate::{
    core::SearchParams,
    gui::theme::Theme,
};

const CARD_TYPES: &[&str] = &[
    "Effect Monster",
    "Fusion Monster",
    "Synchro Monster",
    "XYZ Monster",
    "Link Monster",
    "Spell Card",
    "Trap Card",
];

const ATTRIBUTES: &[&str] = &["DARK", "LIGHT", "EARTH", "WATER", "FIRE", "WIND", "DIVINE"];

/// Widget-local candidate values. Numeric fields stay strings until
/// submit; text that does not parse means "no filter on that field".
#[derive(Default, Clone)]
pub struct SearchForm {
    name: String,
    card_type: String,
    attribute: String,
    level: String,
    atk: String,
    def: String,
}

impl SearchForm {
    /// Draws the form; returns the submitted params. An empty form still
    /// submits (default params, empty query upstream).
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<SearchParams> {
        let mut submitted = None;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(theme.heading("Search Filters"));
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Card Name:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.name)
                        .hint_text("Search cards...")
                        .desired_width(220.0),
                );

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = Some(self.params());
                }
            });

            ui.horizontal(|ui| {
                ui.label("Card Type:");
                combo_with_any(ui, "card_type_combo", &mut self.card_type, CARD_TYPES, "All Types");

                ui.add_space(12.0);

                ui.label("Attribute:");
                combo_with_any(
                    ui,
                    "attribute_combo",
                    &mut self.attribute,
                    ATTRIBUTES,
                    "All Attributes",
                );
            });

            ui.horizontal(|ui| {
                ui.label("Level/Rank:");
                ui.add(egui::TextEdit::singleline(&mut self.level).desired_width(50.0));

                ui.add_space(12.0);

                ui.label("ATK:");
                ui.add(egui::TextEdit::singleline(&mut self.atk).desired_width(60.0));

                ui.add_space(12.0);

                ui.label("DEF:");
                ui.add(egui::TextEdit::singleline(&mut self.def).desired_width(60.0));
            });

            ui.add_space(6.0);

            if ui.button("Search Cards").clicked() {
                submitted = Some(self.params());
            }
        });

        submitted
    }

    /// Current candidate value, sparse fields omitted.
    pub fn params(&self) -> SearchParams {
        SearchParams {
            name: non_empty(&self.name),
            card_type: non_empty(&self.card_type),
            race: None,
            attribute: non_empty(&self.attribute),
            level: self.level.trim().parse().ok(),
            atk: self.atk.trim().parse().ok(),
            def: self.def.trim().parse().ok(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn combo_with_any(
    ui: &mut egui::Ui,
    combo_id: &str,
    value: &mut String,
    options: &[&str],
    any_label: &str,
) {
    let selected_text = if value.is_empty() { any_label.to_string() } else { value.clone() };

    egui::ComboBox::from_id_salt(combo_id).selected_text(selected_text).show_ui(ui, |ui| {
        ui.selectable_value(value, String::new(), any_label);
        for option in options {
            ui.selectable_value(value, option.to_string(), *option);
        }
    });
}
