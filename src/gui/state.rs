use crate::core::{
    tasks::types::SearchOutcome,
    Card,
};

/// Every failure collapses to this one banner message.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch cards. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Search-side UI state. The selected card is an orthogonal sub-state:
/// selecting and closing never touch the phase or the result list.
pub struct SearchState {
    pub cards: Vec<Card>,
    pub selected: Option<Card>,
    phase: SearchPhase,
    next_request: u64,
    latest_request: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            selected: None,
            phase: SearchPhase::Idle,
            next_request: 0,
            latest_request: 0,
        }
    }

    /// Clears any prior error, keeps the current grid until the response
    /// lands, and hands out the request id the settlement must echo.
    pub fn begin_search(&mut self) -> u64 {
        self.next_request += 1;
        self.latest_request = self.next_request;
        self.phase = SearchPhase::Loading;

        self.latest_request
    }

    /// Returns false when the settlement is stale (a newer search was
    /// issued since) and the state was left untouched. Last-issued wins,
    /// not last-settled.
    pub fn settle(&mut self, request_id: u64, result: SearchOutcome) -> bool {
        if request_id != self.latest_request {
            return false;
        }

        match result {
            Ok(cards) => {
                self.cards = cards;
                self.phase = SearchPhase::Loaded;
            }
            Err(_) => {
                self.cards.clear();
                self.phase = SearchPhase::Failed(FETCH_ERROR_MESSAGE.to_string());
            }
        }

        true
    }

    pub fn select(&mut self, card: Card) {
        self.selected = Some(card);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        Card,
        CardImage,
        CardPrice,
    };

    fn card(id: u32, name: &str) -> Card {
        Card {
            id,
            name: name.to_string(),
            card_type: "Normal Monster".to_string(),
            desc: "A test card.".to_string(),
            race: "Dragon".to_string(),
            attribute: Some("LIGHT".to_string()),
            level: Some(4),
            atk: Some(1200),
            def: Some(1000),
            card_images: vec![CardImage {
                id,
                image_url: format!("https://images.example/cards/{id}.jpg"),
                image_url_small: format!("https://images.example/cards_small/{id}.jpg"),
            }],
            card_prices: vec![CardPrice {
                cardmarket_price: "0.10".to_string(),
                tcgplayer_price: "0.12".to_string(),
                ebay_price: "0.99".to_string(),
                amazon_price: "1.05".to_string(),
            }],
        }
    }

    #[test]
    fn begins_idle_with_empty_grid() {
        let state = SearchState::new();

        assert_eq!(*state.phase(), SearchPhase::Idle);
        assert!(state.cards.is_empty());
        assert!(state.selected.is_none());
    }

    #[test]
    fn begin_search_enters_loading_and_clears_error() {
        let mut state = SearchState::new();
        let id = state.begin_search();
        state.settle(id, Err("boom".to_string()));
        assert!(state.error().is_some());

        state.begin_search();

        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_populates_grid() {
        let mut state = SearchState::new();
        let id = state.begin_search();

        assert!(state.settle(id, Ok(vec![card(1, "Kuriboh")])));

        assert_eq!(*state.phase(), SearchPhase::Loaded);
        assert_eq!(state.cards.len(), 1);
        assert_eq!(state.cards[0].name, "Kuriboh");
    }

    #[test]
    fn failure_clears_grid_and_sets_static_message() {
        let mut state = SearchState::new();
        let id = state.begin_search();
        state.settle(id, Ok(vec![card(1, "Kuriboh")]));

        let id = state.begin_search();
        assert!(state.settle(id, Err("network unreachable".to_string())));

        assert!(state.cards.is_empty());
        assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn stale_settlement_is_discarded() {
        let mut state = SearchState::new();
        let first = state.begin_search();
        let second = state.begin_search();

        assert!(!state.settle(first, Ok(vec![card(1, "Kuriboh")])));
        assert!(state.is_loading());
        assert!(state.cards.is_empty());

        assert!(state.settle(second, Ok(vec![card(2, "Sangan")])));
        assert_eq!(state.cards[0].name, "Sangan");
    }

    #[test]
    fn stale_failure_cannot_clobber_newer_success() {
        let mut state = SearchState::new();
        let first = state.begin_search();
        let second = state.begin_search();

        state.settle(second, Ok(vec![card(2, "Sangan")]));
        assert!(!state.settle(first, Err("late failure".to_string())));

        assert_eq!(*state.phase(), SearchPhase::Loaded);
        assert_eq!(state.cards.len(), 1);
    }

    #[test]
    fn empty_result_is_success_not_error() {
        let mut state = SearchState::new();
        let id = state.begin_search();

        state.settle(id, Ok(Vec::new()));

        assert_eq!(*state.phase(), SearchPhase::Loaded);
        assert!(state.cards.is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn selection_is_orthogonal_to_search_phase() {
        let mut state = SearchState::new();
        let id = state.begin_search();
        state.settle(id, Ok(vec![card(1, "Kuriboh")]));

        state.select(card(1, "Kuriboh"));
        assert_eq!(*state.phase(), SearchPhase::Loaded);
        assert_eq!(state.cards.len(), 1);
        assert_eq!(state.selected.as_ref().unwrap().name, "Kuriboh");

        state.clear_selection();
        assert_eq!(*state.phase(), SearchPhase::Loaded);
        assert_eq!(state.cards.len(), 1);
        assert!(state.selected.is_none());
    }
}
