use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    LookupCard(u32),
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        id_query: &mut String,
        lookup_pending: bool,
        db_version: Option<&str>,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();

                ui.label("Card ID:");
                ui.add(egui::TextEdit::singleline(id_query).desired_width(90.0));

                let parsed_id = id_query.trim().parse::<u32>().ok();
                if ui
                    .add_enabled(
                        parsed_id.is_some() && !lookup_pending,
                        egui::Button::new("Look up"),
                    )
                    .clicked()
                {
                    if let Some(id) = parsed_id {
                        action = Some(TopBarAction::LookupCard(id));
                    }
                }

                if lookup_pending {
                    ui.spinner();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, db_version);
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, db_version: Option<&str>) {
        let online = db_version.is_some();

        let color = if online {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = match db_version {
            Some(version) => format!("Connected to YGOPRODeck (db v{})", version),
            None => "Not connected to YGOPRODeck".to_string(),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("YGOPRODeck").on_hover_text(&tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(&tooltip);
        });
    }
}
