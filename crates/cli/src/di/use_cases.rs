use super::Repositories;
use focusgate_application::services::{GrantScheduler, ReblockService};
use focusgate_application::use_cases::{
    AddSiteUseCase, CheckUrlUseCase, ExtendGrantUseCase, GetHistoryUseCase, GetSitesUseCase,
    GetStatsUseCase, RemoveSiteUseCase, ToggleSiteUseCase, UnblockSiteUseCase,
    UpdateDurationUseCase,
};
use focusgate_domain::{Config, DomainMatcher};
use focusgate_infrastructure::alarms::TokioAlarmService;
use focusgate_infrastructure::notifications::NotificationCenter;
use std::sync::Arc;

pub struct UseCases {
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
    pub reblock: Arc<ReblockService>,
}

impl UseCases {
    pub fn new(
        repos: &Repositories,
        config: &Config,
        alarms: Arc<TokioAlarmService>,
        notifier: Arc<NotificationCenter>,
    ) -> Self {
        let scheduler = Arc::new(GrantScheduler::new(
            alarms,
            notifier.clone(),
            config.blocking.warning_lead_seconds,
        ));
        let reblock = Arc::new(ReblockService::new(
            repos.sites.clone(),
            repos.history.clone(),
            scheduler.clone(),
            notifier.clone(),
        ));
        let matcher = DomainMatcher::new(config.blocking.alias_pairs());

        Self {
            add_site: Arc::new(AddSiteUseCase::new(
                repos.sites.clone(),
                config.blocking.default_grant_minutes,
            )),
            remove_site: Arc::new(RemoveSiteUseCase::new(
                repos.sites.clone(),
                scheduler.clone(),
            )),
            toggle_site: Arc::new(ToggleSiteUseCase::new(
                repos.sites.clone(),
                scheduler.clone(),
                reblock.clone(),
            )),
            update_duration: Arc::new(UpdateDurationUseCase::new(repos.sites.clone())),
            get_sites: Arc::new(GetSitesUseCase::new(repos.sites.clone())),
            unblock_site: Arc::new(UnblockSiteUseCase::new(
                repos.sites.clone(),
                repos.history.clone(),
                reblock.clone(),
            )),
            extend_grant: Arc::new(ExtendGrantUseCase::new(
                repos.sites.clone(),
                scheduler,
                notifier,
            )),
            check_url: Arc::new(CheckUrlUseCase::new(repos.sites.clone(), matcher)),
            get_history: Arc::new(GetHistoryUseCase::new(repos.history.clone())),
            get_stats: Arc::new(GetStatsUseCase::new(repos.history.clone())),
            reblock,
        }
    }
}
