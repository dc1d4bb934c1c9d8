//! # Restaurant Chooser
//!
//! Helps a group of people agree on where to eat.
//!
//! - **[model]**: [`Person`](model::Person) and [`Restaurant`](model::Restaurant) records,
//!   their keys and the raw forms used to add them.
//! - **[validation]**: field rules for those forms.
//! - **[people_actor]** / **[restaurant_actor]**: the two persisted catalogs, each a
//!   [`CatalogActor`](catalog_actor::CatalogActor) over a shared key-value store.
//! - **[clients]**: typed wrappers used to talk to the catalogs.
//! - **[selection]**: the session workflow (pick participants, filter, choose, veto, accept).
//! - **[lifecycle]**: [`ChooserSystem`](lifecycle::ChooserSystem), which wires everything and
//!   turns presentation events into snapshots.
//! - **[config]**: data directory, channel sizing and RNG seed.

pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod people_actor;
pub mod restaurant_actor;
pub mod selection;
pub mod validation;
