use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::core::{
    Card,
    CardResponse,
    DuelscopeError,
    SearchParams,
};

const BASE_URL: &str = "https://db.ygoprodeck.com/api/v7";

fn http_client() -> Result<Client, DuelscopeError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| DuelscopeError::Custom(format!("HTTP client build failed: {e}")))
}

async fn get_json<T: for<'de> Deserialize<'de>>(
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, DuelscopeError> {
    let url = format!("{}/{}", BASE_URL, path);

    let response = http_client()?.get(&url).query(query).send().await?;

    if !response.status().is_success() {
        return Err(DuelscopeError::HttpStatus {
            status: response.status().as_u16(),
            url: response.url().to_string(),
        });
    }

    Ok(response.json().await?)
}

/// One GET per call; populated fields only. Non-success status and
/// transport failures both come back as errors with no finer distinction.
pub async fn search_cards(params: &SearchParams) -> Result<Vec<Card>, DuelscopeError> {
    let response: CardResponse = get_json("cardinfo.php", &params.query_pairs()).await?;

    response.into_validated()
}

pub async fn card_by_id(id: u32) -> Result<Option<Card>, DuelscopeError> {
    let response: CardResponse = get_json("cardinfo.php", &[("id", id.to_string())]).await?;

    let cards = response.into_validated()?;
    Ok(cards.into_iter().next())
}

#[derive(Debug, Deserialize)]
struct DbVersion {
    database_version: String,
}

//Used to check if the upstream database is reachable
pub async fn database_version() -> Result<String, DuelscopeError> {
    let versions: Vec<DbVersion> = get_json("checkDBVer.php", &[]).await?;

    versions
        .into_iter()
        .next()
        .map(|v| v.database_version)
        .ok_or_else(|| DuelscopeError::Custom("Empty checkDBVer response".to_string()))
}
