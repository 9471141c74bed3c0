mod grant_scheduler;
mod reblock_service;

pub use grant_scheduler::GrantScheduler;
pub use reblock_service::{ReblockService, ReconcileSummary};
