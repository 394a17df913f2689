//! Spikex spot trading API client.
//!
//! - [`rest`] - REST API client for HTTP-based requests

pub mod rest;

pub use rest::SpotRestClient;
