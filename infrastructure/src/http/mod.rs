//! Outbound HTTP adapters

mod reqwest_fetcher;

pub use reqwest_fetcher::{DEFAULT_USER_AGENT, ReqwestFetcher, ReqwestFetcherBuilder};
