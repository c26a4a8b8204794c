// Remote data access: raw JSON fetch plus the Frankfurter client/mappers.
pub mod fetch;
pub mod frankfurter;

pub use fetch::{FetchError, HttpJsonFetcher, JsonFetcher};
pub use frankfurter::{ApiError, FrankfurterClient};
