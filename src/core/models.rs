use serde::{
    Deserialize,
    Serialize,
};

use crate::core::DuelscopeError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardImage {
    pub id: u32,
    pub image_url: String,
    pub image_url_small: String,
}

/// Market quotes as reported upstream. The API sends these as strings
/// (e.g. "0.42"), so they stay strings here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardPrice {
    pub cardmarket_price: String,
    pub tcgplayer_price: String,
    pub ebay_price: String,
    pub amazon_price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub desc: String,
    pub race: String,
    pub attribute: Option<String>,
    pub level: Option<u32>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
    pub card_images: Vec<CardImage>,
    pub card_prices: Vec<CardPrice>,
}

impl Card {
    /// Invariant behind every `[0]` in the renderers: once a card passes
    /// here, it has at least one image and one price entry.
    pub fn validate(&self) -> Result<(), DuelscopeError> {
        if self.card_images.is_empty() {
            return Err(DuelscopeError::MalformedCard { id: self.id, missing: "image" });
        }

        if self.card_prices.is_empty() {
            return Err(DuelscopeError::MalformedCard { id: self.id, missing: "price" });
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct CardResponse {
    pub data: Vec<Card>,
}

impl CardResponse {
    pub fn into_validated(self) -> Result<Vec<Card>, DuelscopeError> {
        for card in &self.data {
            card.validate()?;
        }

        Ok(self.data)
    }
}

/// Sparse filter set; an absent field means "no filter on that field".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub name: Option<String>,
    pub card_type: Option<String>,
    pub race: Option<String>,
    pub attribute: Option<String>,
    pub level: Option<u32>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
}

impl SearchParams {
    /// Query pairs for cardinfo.php, populated fields only, in the order
    /// the upstream API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(name) = &self.name {
            pairs.push(("fname", name.clone()));
        }
        if let Some(card_type) = &self.card_type {
            pairs.push(("type", card_type.clone()));
        }
        if let Some(race) = &self.race {
            pairs.push(("race", race.clone()));
        }
        if let Some(attribute) = &self.attribute {
            pairs.push(("attribute", attribute.clone()));
        }
        if let Some(level) = self.level {
            pairs.push(("level", level.to_string()));
        }
        if let Some(atk) = self.atk {
            pairs.push(("atk", atk.to_string()));
        }
        if let Some(def) = self.def {
            pairs.push(("def", def.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster_json() -> &'static str {
        r#"{
            "id": 89631139,
            "name": "Blue-Eyes White Dragon",
            "type": "Normal Monster",
            "desc": "This legendary dragon is a powerful engine of destruction.",
            "race": "Dragon",
            "attribute": "LIGHT",
            "level": 8,
            "atk": 3000,
            "def": 2500,
            "card_images": [
                {
                    "id": 89631139,
                    "image_url": "https://images.ygoprodeck.com/images/cards/89631139.jpg",
                    "image_url_small": "https://images.ygoprodeck.com/images/cards_small/89631139.jpg"
                }
            ],
            "card_prices": [
                {
                    "cardmarket_price": "0.25",
                    "tcgplayer_price": "0.30",
                    "ebay_price": "1.99",
                    "amazon_price": "2.49"
                }
            ]
        }"#
    }

    fn spell_json() -> &'static str {
        r#"{
            "id": 19613556,
            "name": "Heavy Storm",
            "type": "Spell Card",
            "desc": "Destroy all Spells and Traps on the field.",
            "race": "Normal",
            "card_images": [
                {
                    "id": 19613556,
                    "image_url": "https://images.ygoprodeck.com/images/cards/19613556.jpg",
                    "image_url_small": "https://images.ygoprodeck.com/images/cards_small/19613556.jpg"
                }
            ],
            "card_prices": [
                {
                    "cardmarket_price": "0.15",
                    "tcgplayer_price": "0.20",
                    "ebay_price": "0.99",
                    "amazon_price": "1.10"
                }
            ]
        }"#
    }

    #[test]
    fn monster_card_deserializes_all_fields() {
        let card: Card = serde_json::from_str(monster_json()).unwrap();

        assert_eq!(card.id, 89631139);
        assert_eq!(card.name, "Blue-Eyes White Dragon");
        assert_eq!(card.card_type, "Normal Monster");
        assert_eq!(card.race, "Dragon");
        assert_eq!(card.attribute.as_deref(), Some("LIGHT"));
        assert_eq!(card.level, Some(8));
        assert_eq!(card.atk, Some(3000));
        assert_eq!(card.def, Some(2500));
        assert_eq!(card.card_images.len(), 1);
        assert_eq!(card.card_prices[0].cardmarket_price, "0.25");
    }

    #[test]
    fn spell_card_deserializes_without_monster_fields() {
        let card: Card = serde_json::from_str(spell_json()).unwrap();

        assert_eq!(card.card_type, "Spell Card");
        assert_eq!(card.attribute, None);
        assert_eq!(card.level, None);
        assert_eq!(card.atk, None);
        assert_eq!(card.def, None);
    }

    #[test]
    fn validate_rejects_card_without_images() {
        let mut card: Card = serde_json::from_str(monster_json()).unwrap();
        card.card_images.clear();

        assert!(matches!(
            card.validate(),
            Err(DuelscopeError::MalformedCard { id: 89631139, missing: "image" })
        ));
    }

    #[test]
    fn validate_rejects_card_without_prices() {
        let mut card: Card = serde_json::from_str(monster_json()).unwrap();
        card.card_prices.clear();

        assert!(matches!(
            card.validate(),
            Err(DuelscopeError::MalformedCard { id: 89631139, missing: "price" })
        ));
    }

    #[test]
    fn response_validation_passes_good_cards_through() {
        let json = format!(r#"{{ "data": [{}, {}] }}"#, monster_json(), spell_json());
        let response: CardResponse = serde_json::from_str(&json).unwrap();

        let cards = response.into_validated().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Blue-Eyes White Dragon");
    }

    #[test]
    fn response_validation_rejects_any_malformed_card() {
        let json = format!(r#"{{ "data": [{}, {}] }}"#, monster_json(), spell_json());
        let mut response: CardResponse = serde_json::from_str(&json).unwrap();
        response.data[1].card_prices.clear();

        assert!(response.into_validated().is_err());
    }
}
