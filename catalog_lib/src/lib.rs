//! Library layer for the catalog client: session storage, configuration,
//! filter handling, rendering, and the list/detail/create/navbar views.
//!
//! Wraps the `catalog_api` crate. Nothing here talks to a terminal; views
//! return their messages and the caller decides how to show them.

pub mod collection;
pub mod config;
pub mod creation;
pub mod currency;
pub mod detail;
pub mod error;
pub mod filter;
pub mod navbar;
pub mod render;
pub mod session;
pub mod storage;
pub mod validation;

pub use catalog_api;
pub use catalog_api::types;
pub use catalog_api::{Client, ProductQuery, Query};

pub use collection::{CollectionView, ViewState};
pub use config::Config;
pub use creation::{CreateOutcome, ProductForm};
pub use currency::CurrencyFormat;
pub use detail::DetailOutcome;
pub use error::CatalogError;
pub use filter::FilterCriteria;
pub use navbar::Navbar;
pub use render::ProductRow;
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
