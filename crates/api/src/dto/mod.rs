mod check;
mod history;
mod notification;
mod site;
mod stats;

pub use check::{CheckQuery, CheckResponse};
pub use history::HistoryEntryResponse;
pub use notification::NotificationResponse;
pub use site::{
    AddSiteRequest, GrantResponse, ExtendResponse, SiteResponse, ToggleSiteRequest,
    UnblockSiteRequest, UpdateDurationRequest,
};
pub use stats::StatsResponse;
