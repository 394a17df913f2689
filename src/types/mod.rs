//! Common types used across the Spikex client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
