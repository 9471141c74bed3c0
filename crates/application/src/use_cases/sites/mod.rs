mod add_site;
mod get_sites;
mod remove_site;
mod toggle_site;
mod update_duration;

pub use add_site::AddSiteUseCase;
pub use get_sites::GetSitesUseCase;
pub use remove_site::RemoveSiteUseCase;
pub use toggle_site::ToggleSiteUseCase;
pub use update_duration::UpdateDurationUseCase;
