use tracing::{error, info};

use crate::catalog_actor::CatalogActor;
use crate::clients::CatalogClient;
use crate::config::CatalogConfig;
use crate::store::{CatalogStore, InMemoryStore};

/// The runtime orchestrator for the catalog.
///
/// Owns the join handle of the catalog actor task and exposes the client
/// used to reach it.
///
/// # Example
///
/// ```rust
/// use catalog_service::config::CatalogConfig;
/// use catalog_service::lifecycle::CatalogSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = CatalogSystem::new(CatalogConfig::default());
///
///     let hits = system.catalog_client.search("phone").await?;
///     assert_eq!(hits.len(), 2);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Catalog actor
    pub catalog_client: CatalogClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Starts the catalog over an in-memory store, seeded unless
    /// `config.seed_items` is false.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: CatalogConfig) -> Self {
        let store = if config.seed_items {
            InMemoryStore::seeded()
        } else {
            InMemoryStore::new()
        };
        info!(items = store.len(), "Using in-memory store");
        Self::with_store(config, store)
    }

    /// Starts the catalog over the given store.
    pub fn with_store<S: CatalogStore>(config: CatalogConfig, store: S) -> Self {
        let (actor, catalog_client) =
            CatalogActor::new(config.buffer_size, store, config.recent_capacity);
        let handle = tokio::spawn(actor.run());

        Self {
            catalog_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the channel, then waits for the actor
    /// task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
