//! Spikex spot REST API client.
//!
//! Provides access to the Spikex spot market data, trading and asset endpoints.
//!
//! # Trait-based API
//!
//! The [`SpikexClient`] trait abstracts all REST API operations, enabling mock
//! implementations for testing and decorators around the real client.
//!
//! ```rust,ignore
//! use spikex_api_client::spot::rest::{SpikexClient, SpotRestClient};
//!
//! async fn use_client<C: SpikexClient>(client: &C) -> Result<(), spikex_api_client::SpikexError> {
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {}", time.server_time);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod envelope;
pub mod private;
pub mod public;
mod traits;

pub use client::{DEFAULT_TIMEOUT, SpotRestClient, SpotRestClientBuilder};
pub use endpoints::SPIKEX_BASE_URL;
pub use envelope::Envelope;
pub use traits::SpikexClient;
