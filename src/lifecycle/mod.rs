//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the catalog.
//!
//! - [`CatalogSystem`] - builds the store, spawns the [`CatalogActor`](crate::catalog_actor::CatalogActor)
//!   and hands out its client
//! - [`setup_tracing`] - initializes structured logging from `RUST_LOG`
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are drained
//! 3. **Await completion** - [`CatalogSystem::shutdown`] joins the actor task
//!
//! Clones of the client held elsewhere keep the actor alive, so drop them
//! before calling `shutdown`.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use self::tracing::*;
