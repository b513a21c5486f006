//! Application context
//!
//! The three list resources are constructed exactly once at startup and
//! passed by reference to every consumer. There are no module-level
//! singletons and no implicit injection; anything that needs a resource
//! takes an [`AppContext`].

use std::sync::Arc;

use crate::api::{ApiClient, RestCollection};
use crate::config::Config;
use crate::error::Result;
use crate::models::{Client, Session, Trainer};
use crate::resource::ListResource;

/// Shared handles for one running client instance.
pub struct AppContext {
    /// Shared HTTP client, also used for endpoints outside the standard
    /// CRUD set (e.g. client lookup by email).
    pub api: Arc<ApiClient>,
    /// Reactive cache of the `trainer` collection.
    pub trainers: ListResource<Trainer>,
    /// Reactive cache of the `client` collection.
    pub clients: ListResource<Client>,
    /// Reactive cache of the `session` collection.
    pub sessions: ListResource<Session>,
}

impl AppContext {
    /// Build all resources from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api = Arc::new(ApiClient::new(&config.api)?);

        let trainers =
            ListResource::new(Arc::new(RestCollection::<Trainer>::new(Arc::clone(&api))));
        let clients =
            ListResource::new(Arc::new(RestCollection::<Client>::new(Arc::clone(&api))));
        let sessions =
            ListResource::new(Arc::new(RestCollection::<Session>::new(Arc::clone(&api))));

        // Cache updates are observable; route them to the log.
        trainers.subscribe(|items| tracing::debug!("trainer cache updated: {} records", items.len()));
        clients.subscribe(|items| tracing::debug!("client cache updated: {} records", items.len()));
        sessions.subscribe(|items| tracing::debug!("session cache updated: {} records", items.len()));

        Ok(Self {
            api,
            trainers,
            clients,
            sessions,
        })
    }
}
