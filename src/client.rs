//! Client facade
//!
//! [`IdentityProviderClient`] pairs a transport with the pagination settings
//! and exposes one-shot sends plus lazy streams over list requests.
//!
//! ```rust,ignore
//! use cognito_idp_client::{operations, ClientConfig, IdentityProviderClient};
//! use futures::TryStreamExt;
//!
//! let config = ClientConfig::for_region("eu-west-1").with_env_overrides();
//! let client = IdentityProviderClient::new(&config)?;
//!
//! let mut users = client.stream_as::<cognito_idp_client::models::User>(
//!     operations::list_users("eu-west-1_pool", Default::default()),
//! )?;
//! while let Some(user) = users.try_next().await? {
//!     println!("{}", user.username);
//! }
//! ```

use crate::config::{ClientConfig, PaginationConfig};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{ItemStream, TokenPaginator};
use crate::request::Request;
use crate::transport::Transport;
use crate::types::JsonValue;
use futures::{StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};

/// Typed entry point for the identity-provider API
#[derive(Clone)]
pub struct IdentityProviderClient {
    transport: Arc<dyn Transport>,
    pagination: PaginationConfig,
}

impl IdentityProviderClient {
    /// Create a client that talks HTTP to the configured endpoint
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = HttpClient::from_config(config)?;
        info!(endpoint = %http.endpoint(), "Created identity-provider client");
        Ok(Self {
            transport: Arc::new(http),
            pagination: config.pagination.clone(),
        })
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            pagination: PaginationConfig::default(),
        }
    }

    /// Replace the pagination settings
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Send a single request and return the raw response
    pub async fn send(&self, request: &Request) -> Result<JsonValue> {
        debug!(action = request.action(), "Sending request");
        self.transport.execute(request).await
    }

    /// Send a single request and decode the response into `T`
    pub async fn send_as<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let response = self.send(request).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// A fresh paginator for a list request
    ///
    /// Fails with [`Error::NotPaginated`] for one-shot requests.
    pub fn paginate(&self, request: Request) -> Result<TokenPaginator> {
        Ok(TokenPaginator::new(Arc::clone(&self.transport), request)?
            .with_max_pages(self.pagination.max_pages))
    }

    /// Lazy stream over every item of a list request
    pub fn stream(&self, request: Request) -> Result<ItemStream> {
        Ok(self.paginate(request)?.into_items())
    }

    /// Lazy stream over every item, each decoded into `T`
    ///
    /// An item that does not decode yields [`Error::JsonParse`] and ends the
    /// stream.
    pub fn stream_as<T>(&self, request: Request) -> Result<ItemStream<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let items = self.stream(request)?;
        let mut failed = false;
        Ok(items
            .and_then(|item| async move { serde_json::from_value::<T>(item).map_err(Error::from) })
            .take_while(move |result| {
                let keep = !failed;
                failed |= result.is_err();
                futures::future::ready(keep)
            })
            .boxed())
    }

    /// Fetch every page and return all items in server order
    pub async fn collect_all(&self, request: Request) -> Result<Vec<JsonValue>> {
        let action = request.action();
        let items: Vec<JsonValue> = self.stream(request)?.try_collect().await?;
        debug!(action, items = items.len(), "Collected all pages");
        Ok(items)
    }
}

impl std::fmt::Debug for IdentityProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityProviderClient")
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}
