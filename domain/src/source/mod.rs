//! Known external sources (cat API, dog API, static text)

pub mod catalog;

pub use catalog::{CAT_API_KEY_HEADER, CAT_API_URL, DOG_API_URL, SourceCatalog};
