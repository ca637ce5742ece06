//! Skyfare core — everything below the UI: search-form state and gating
//! policy, the sky-scrapper API client, wire types, configuration, and
//! timestamp formatting.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod timefmt;
pub mod types;

pub use client::FlightApi;
pub use config::ApiConfig;
pub use error::ApiError;
