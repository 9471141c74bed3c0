mod check_url;
pub mod grants;
pub mod history;
pub mod sites;

pub use check_url::CheckUrlUseCase;
pub use grants::{ExtendGrantUseCase, UnblockSiteUseCase};
pub use history::{GetHistoryUseCase, GetStatsUseCase};
pub use sites::{
    AddSiteUseCase, GetSitesUseCase, RemoveSiteUseCase, ToggleSiteUseCase, UpdateDurationUseCase,
};
