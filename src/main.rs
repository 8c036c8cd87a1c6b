//! Demo walk-through of the catalog: search, add, delete, undo, then print
//! the recent items and the activity log.

use catalog_service::config::CatalogConfig;
use catalog_service::lifecycle::{setup_tracing, CatalogSystem};
use catalog_service::model::{ItemId, NewItem};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    info!("Starting catalog service");

    let system = CatalogSystem::new(config);
    let client = system.catalog_client.clone();

    let hits = client.search("phone").await.map_err(|e| e.to_string())?;
    info!(count = hits.len(), "Search results for 'phone'");

    let span = tracing::info_span!("add_items");
    async {
        for (name, price) in [("Tablet", 5_000_000), ("Smartwatch", 3_000_000)] {
            match client.add_item(NewItem::new(name, price)).await {
                Ok(item) => info!(id = %item.id, name = %item.name, "Item added"),
                Err(e) => error!(error = %e, "Add failed"),
            }
        }
    }
    .instrument(span)
    .await;

    // Duplicate names are refused.
    if let Err(e) = client.add_item(NewItem::new("Laptop", 1)).await {
        info!(error = %e, "Duplicate rejected");
    }

    let removed = client
        .delete_item(ItemId(3))
        .await
        .map_err(|e| e.to_string())?;
    info!(name = %removed.name, "Item deleted");

    let span = tracing::info_span!("undo");
    async {
        loop {
            match client.undo().await {
                Ok(outcome) => info!(?outcome, "Undone"),
                Err(e) => {
                    info!(error = %e, "Undo stopped");
                    break;
                }
            }
        }
    }
    .instrument(span)
    .await;

    for item in client.recent_items().await.map_err(|e| e.to_string())? {
        info!(id = %item.id, name = %item.name, price = item.price, "Recent");
    }
    for entry in client.activity_log().await.map_err(|e| e.to_string())? {
        info!(%entry, "Activity");
    }

    drop(client);
    system.shutdown().await?;

    info!("Catalog service completed successfully");
    Ok(())
}
