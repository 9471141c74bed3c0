//! Focusgate Background Jobs
mod reconciliation;
mod runner;

pub use reconciliation::ReconciliationJob;
pub use runner::{JobRunner, SpawnableJob};
