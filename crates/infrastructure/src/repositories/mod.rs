pub mod history_repository;
pub mod site_repository;

pub use history_repository::SqliteHistoryRepository;
pub use site_repository::SqliteSiteRepository;
