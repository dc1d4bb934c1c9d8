//! # Selection Workflow
//!
//! One session of choosing a restaurant:
//!
//! 1. **Start**: read both catalogs; every person is listed, nobody selected.
//! 2. **Pick participants**: toggle people, confirm at least one.
//! 3. **Filter**: optionally restrict cuisine, maximum price, minimum rating, delivery.
//! 4. **Choose**: a uniform random pick among the matching restaurants.
//! 5. **Veto or accept**: each participant may veto once. A vetoed restaurant is gone for
//!    the rest of the session, and a new pick is made. When one candidate is left it is
//!    accepted automatically.
//!
//! ## Structure
//!
//! - [`state`] - [`SelectionState`], one variant per phase, and the [`SelectionView`] snapshot
//! - [`filter`] - [`RestaurantFilter`]
//! - [`machine`] - [`SelectionMachine`], the pure transition rules
//! - [`actor`] - [`SelectionActor`], which owns the machine and reads the catalogs
//! - [`error`] - [`SelectionError`]

pub mod actor;
pub mod error;
pub mod filter;
pub mod machine;
pub mod state;

pub use actor::*;
pub use error::*;
pub use filter::*;
pub use machine::*;
pub use state::*;
