use std::time::Instant;

use eframe::egui;

use super::{
    card_detail::CardDetail,
    card_grid::CardGrid,
    error_modal::ErrorModal,
    search_form::SearchForm,
    settings::SettingsData,
    state::SearchState,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        SearchParams,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const API_CHECK_INTERVAL_SECS: u64 = 60;

pub struct DuelscopeApp {
    // UI State
    pub search: SearchState,
    pub form: SearchForm,
    pub theme: Theme,
    pub settings: SettingsData,
    error_modal: ErrorModal,

    // Top bar
    id_query: String,
    lookup_pending: bool,

    // External services
    db_version: Option<String>,
    last_api_check: Option<Instant>,
    task_manager: TaskManager,
}

impl DuelscopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Card art comes straight from the image URLs in the API payload.
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings = load_json_or_default::<SettingsData>("settings.json");
        let theme = Theme::dracula();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let task_manager = TaskManager::new();
        task_manager.check_api_status();

        Self {
            search: SearchState::new(),
            form: SearchForm::default(),
            theme,
            settings,
            error_modal: ErrorModal::default(),
            id_query: String::new(),
            lookup_pending: false,
            db_version: None,
            last_api_check: Some(Instant::now()),
            task_manager,
        }
    }

    fn run_search(&mut self, params: SearchParams) {
        let request_id = self.search.begin_search();
        self.task_manager.search_cards(params, request_id);
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::SearchCompleted { request_id, result } => {
                if !self.search.settle(request_id, result) {
                    println!("Ignoring stale search response (request {})", request_id);
                }
            }

            TaskResult::CardFetched(result) => {
                self.lookup_pending = false;
                match result {
                    Ok(Some(card)) => self.search.select(card),
                    Ok(None) => self.error_modal.show_error(
                        "Card Lookup",
                        "No card with that id was found.",
                        None::<String>,
                    ),
                    Err(e) => self.error_modal.show_error(
                        "Card Lookup",
                        "Unable to fetch the requested card.",
                        Some(&e),
                    ),
                }
            }

            TaskResult::ApiStatus(version) => {
                self.db_version = version;
            }
        }
    }

    fn update_api_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_api_check {
            None => true,
            Some(last_check) => now.duration_since(last_check).as_secs() >= API_CHECK_INTERVAL_SECS,
        };

        if should_check {
            self.task_manager.check_api_status();
            self.last_api_check = Some(now);
        }
    }

    fn persist_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for DuelscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_api_status();

        if let Some(action) =
            TopBar::show(ctx, &mut self.id_query, self.lookup_pending, self.db_version.as_deref())
        {
            match action {
                TopBarAction::LookupCard(id) => {
                    self.lookup_pending = true;
                    self.task_manager.fetch_card(id);
                }
            }
        }

        self.persist_theme_preference(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Yu-Gi-Oh! Card Search");
            ui.add_space(8.0);

            if let Some(params) = self.form.show(ui, &self.theme) {
                self.run_search(params);
            }

            if let Some(message) = self.search.error() {
                let message = message.to_string();
                ui.add_space(8.0);
                egui::Frame::group(ui.style())
                    .stroke(egui::Stroke::new(1.0, self.theme.red()))
                    .show(ui, |ui| {
                        ui.colored_label(self.theme.red(), message);
                    });
            }

            ui.add_space(8.0);

            if self.search.is_loading() {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.label("Searching cards...");
                });
            } else {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(card) = CardGrid::show(ui, &self.search.cards, &self.theme) {
                        self.search.select(card);
                    }
                });
            }
        });

        if let Some(card) = self.search.selected.clone() {
            if CardDetail::show(ctx, &card, &self.theme) {
                self.search.clear_selection();
            }
        }

        self.error_modal.show(ctx);
    }
}
