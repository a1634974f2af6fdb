//! Domain models for taxostage
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Status`] - How far a class label can be trusted
//! - [`Node`] - One class in the taxonomy arena
//! - [`Scenario`] - A replayable taxonomy evolution with expectations
//! - [`TaxonomyOptions`] - Propagation policy knobs

mod extract;
mod node;
mod options;
mod scenario;
mod status;

pub use extract::{Extract, StatusReport};
pub use node::{Node, NodeId};
pub use options::{BatchMode, SiblingScope, TaxonomyOptions};
pub use scenario::{Edge, Scenario};
pub use status::Status;
