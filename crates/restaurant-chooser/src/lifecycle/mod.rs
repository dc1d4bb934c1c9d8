//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the actors of the application, and is the single entry point
//! for the presentation layer: it sends [`Event`]s and renders the returned [`Snapshot`]s.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! // 1. Create actors (no dependencies yet)
//! let (people_actor, people_client) = people_actor::new(store.clone(), buffer);
//! let (restaurant_actor, restaurant_client) = restaurant_actor::new(store, buffer);
//! let (selection_actor, selection_client) = SelectionActor::new(buffer, rng);
//!
//! // 2. Start them; the selection actor receives the catalog clients as context
//! tokio::spawn(people_actor.run());
//! tokio::spawn(restaurant_actor.run());
//! tokio::spawn(selection_actor.run((people_client.clone(), restaurant_client.clone())));
//! ```
//!
//! The dependency graph is acyclic (selection reads the catalogs, never the reverse), so
//! dropping every client is enough to stop every actor.

pub mod chooser_system;

pub use chooser_system::*;
