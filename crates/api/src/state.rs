use focusgate_application::ports::Notifier;
use focusgate_application::use_cases::{
    AddSiteUseCase, CheckUrlUseCase, ExtendGrantUseCase, GetHistoryUseCase, GetSitesUseCase,
    GetStatsUseCase, RemoveSiteUseCase, ToggleSiteUseCase, UnblockSiteUseCase,
    UpdateDurationUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub add_site: Arc<AddSiteUseCase>,
    pub remove_site: Arc<RemoveSiteUseCase>,
    pub toggle_site: Arc<ToggleSiteUseCase>,
    pub update_duration: Arc<UpdateDurationUseCase>,
    pub get_sites: Arc<GetSitesUseCase>,
    pub unblock_site: Arc<UnblockSiteUseCase>,
    pub extend_grant: Arc<ExtendGrantUseCase>,
    pub check_url: Arc<CheckUrlUseCase>,
    pub get_history: Arc<GetHistoryUseCase>,
    pub get_stats: Arc<GetStatsUseCase>,
    pub notifier: Arc<dyn Notifier>,
}
