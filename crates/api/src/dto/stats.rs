use focusgate_domain::UnblockStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_last_7_days: u64,
    pub total_last_24_hours: u64,
    pub most_unblocked_domain: Option<String>,
    pub most_unblocked_count: u64,
    pub daily_average: f64,
    pub focus_streak_days: u32,
}

impl StatsResponse {
    pub fn from_domain(stats: UnblockStats) -> Self {
        let (most_unblocked_domain, most_unblocked_count) = match stats.most_unblocked {
            Some(top) => (Some(top.domain), top.count),
            None => (None, 0),
        };
        Self {
            total_last_7_days: stats.total_last_7_days,
            total_last_24_hours: stats.total_last_24_hours,
            most_unblocked_domain,
            most_unblocked_count,
            daily_average: stats.daily_average,
            focus_streak_days: stats.focus_streak_days,
        }
    }
}
