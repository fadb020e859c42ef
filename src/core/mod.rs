pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::DuelscopeError;
pub use models::{
    Card,
    CardImage,
    CardPrice,
    CardResponse,
    SearchParams,
};
