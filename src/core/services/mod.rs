//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`taxonomy`] - The taxonomy database and status propagation
//! - [`evaluator`] - Compare computed statuses with expected ones
//! - [`runner`] - Replay a scenario end to end

pub mod evaluator;
pub mod runner;
pub mod taxonomy;

pub use evaluator::{Evaluation, Mismatch, accuracy, evaluate};
pub use runner::{ScenarioOutcome, run_scenario};
pub use taxonomy::Taxonomy;
