use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuelscopeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Card {id} has no {missing} entries")]
    MalformedCard { id: u32, missing: &'static str },

    #[error("DuelscopeError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for DuelscopeError {
    fn from(error: reqwest::Error) -> Self {
        DuelscopeError::Reqwest(Box::new(error))
    }
}
