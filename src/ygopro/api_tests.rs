#[cfg(test)]
mod tests {
    use crate::core::SearchParams;

    fn encode(pairs: &[(&'static str, String)]) -> String {
        serde_urlencoded::to_string(pairs).unwrap()
    }

    #[test]
    fn empty_params_produce_empty_query() {
        let params = SearchParams::default();

        assert!(params.query_pairs().is_empty());
        assert_eq!(encode(&params.query_pairs()), "");
    }

    #[test]
    fn only_populated_fields_appear() {
        let params = SearchParams {
            name: Some("Blue-Eyes".to_string()),
            level: Some(8),
            ..Default::default()
        };

        let pairs = params.query_pairs();
        assert_eq!(
            pairs,
            vec![("fname", "Blue-Eyes".to_string()), ("level", "8".to_string())]
        );
        assert_eq!(encode(&pairs), "fname=Blue-Eyes&level=8");
    }

    #[test]
    fn all_fields_follow_declaration_order() {
        let params = SearchParams {
            name: Some("Dragon".to_string()),
            card_type: Some("Effect Monster".to_string()),
            race: Some("Dragon".to_string()),
            attribute: Some("DARK".to_string()),
            level: Some(7),
            atk: Some(2400),
            def: Some(2000),
        };

        let keys: Vec<&str> = params.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["fname", "type", "race", "attribute", "level", "atk", "def"]);
    }

    #[test]
    fn numeric_fields_are_stringified() {
        let params = SearchParams { atk: Some(3000), def: Some(2500), ..Default::default() };

        assert_eq!(
            params.query_pairs(),
            vec![("atk", "3000".to_string()), ("def", "2500".to_string())]
        );
    }

    #[test]
    fn multi_word_values_encode_space_as_plus() {
        let params =
            SearchParams { card_type: Some("Normal Monster".to_string()), ..Default::default() };

        assert_eq!(encode(&params.query_pairs()), "type=Normal+Monster");
    }
}
