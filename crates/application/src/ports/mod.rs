mod alarm_service;
mod history_repository;
mod notifier;
mod site_repository;

pub use alarm_service::AlarmService;
pub use history_repository::HistoryRepository;
pub use notifier::Notifier;
pub use site_repository::SiteRepository;
