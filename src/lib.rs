// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Cognito IDP client
//!
//! Typed request builders and lazy pagination for the user-pool
//! identity-provider API.
//!
//! ## Features
//!
//! - **Operation builders**: one function per action, snake_case options in,
//!   UpperCamelCase wire bodies out
//! - **Lazy pagination**: list actions become `futures` streams that fetch
//!   pages on demand and restart from the first page when recreated
//! - **Pluggable transport**: HTTP with retry, backoff and rate limiting, or
//!   any [`Transport`] implementation
//! - **Typed models**: optional decoding of list items
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cognito_idp_client::{operations, ClientConfig, IdentityProviderClient, Result};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_file("cognito.yaml")?.with_env_overrides();
//!     let client = IdentityProviderClient::new(&config)?;
//!
//!     let request = operations::list_users("eu-west-1_pool", Default::default());
//!     let mut users = client.stream(request)?;
//!     while let Some(user) = users.try_next().await? {
//!         println!("{}", user["Username"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    IdentityProviderClient                    │
//! │   send(request)     stream(request)     collect_all(request) │
//! └──────────────────────────────────────────────────────────────┘
//!          │                    │
//! ┌────────┴───────┬────────────┴────────┬───────────────────────┐
//! │  Operations    │  Pagination         │  Transport            │
//! ├────────────────┼─────────────────────┼───────────────────────┤
//! │ Options bags   │ Continuation token  │ HTTP POST + retry     │
//! │ Normalizer     │ Item / page streams │ Rate limit, signing   │
//! │ Request        │ Page cap            │ Mock (tests)          │
//! └────────────────┴─────────────────────┴───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// snake_case to UpperCamelCase key normalization
pub mod normalize;

/// Request descriptors
pub mod request;

/// Transport and signing seams
pub mod transport;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Continuation-token pagination
pub mod pagination;

/// Operation builders
pub mod operations;

/// Typed response items
pub mod models;

/// Client facade
pub mod client;

/// Scripted transport for tests
pub mod mock;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::IdentityProviderClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::TokenPaginator;
pub use request::{PageSpec, Request};
pub use transport::{RequestSigner, Transport};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
