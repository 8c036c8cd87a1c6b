//! # Catalog Service
//!
//! > **A small item catalog with a recent-items ring and single-action undo.**
//!
//! Items (`id` / `name` / `price`) can be searched, added and deleted. Each
//! successful add or delete is recorded on an undo stack so the latest change
//! can be reverted, and accepted items are kept in a bounded ring of recent
//! additions. An activity log keeps a human-readable trail of all of it.
//!
//! ## Concurrency Model
//!
//! All catalog state (store, ring, undo stack, activity log) is owned by a
//! single [`CatalogActor`](catalog_actor::CatalogActor) running in its own
//! Tokio task. Callers hold a cloneable [`CatalogClient`](clients::CatalogClient)
//! and talk to the actor over a channel. Requests are processed one at a time,
//! so a store call always completes before the history structures are updated,
//! and no locks are needed.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`], [`history`])
//! - [`Item`](model::Item), [`NewItem`](model::NewItem), [`ItemId`](model::ItemId)
//! - [`RecentItemsRing`](history::RecentItemsRing), [`UndoStack`](history::UndoStack),
//!   [`ActivityLog`](history::ActivityLog)
//!
//! ### 2. The Persistence Seam ([`store`])
//! - [`CatalogStore`](store::CatalogStore) trait and the [`InMemoryStore`](store::InMemoryStore)
//!
//! ### 3. The Engine ([`catalog_actor`])
//! - The message loop that applies mutations and undo
//!
//! ### 4. The Interface ([`clients`])
//! - [`CatalogClient`](clients::CatalogClient), the only way in
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - [`CatalogSystem`](lifecycle::CatalogSystem) starts and stops the actor
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for a scriptable store and a detached client.

pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod history;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod store;
