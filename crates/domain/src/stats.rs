use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::history::HistoryEntry;

const STREAK_CAP_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

/// Usage statistics derived from the unblock history. Pure computation:
/// no mutation, O(history size).
#[derive(Debug, Clone, Serialize)]
pub struct UnblockStats {
    pub total_last_7_days: u64,
    pub total_last_24_hours: u64,
    pub most_unblocked: Option<DomainCount>,
    pub daily_average: f64,
    pub focus_streak_days: u32,
}

impl UnblockStats {
    pub fn compute(history: &[HistoryEntry], now: DateTime<Utc>) -> Self {
        let now_ms = now.timestamp_millis();
        let week_ago_ms = now_ms - 7 * 86_400_000;
        let day_ago_ms = now_ms - 86_400_000;

        let mut total_week = 0u64;
        let mut total_day = 0u64;
        let mut counts: Vec<DomainCount> = Vec::new();

        for entry in history {
            if entry.timestamp_ms >= week_ago_ms {
                total_week += 1;
                match counts.iter_mut().find(|c| c.domain == entry.domain) {
                    Some(c) => c.count += 1,
                    None => counts.push(DomainCount {
                        domain: entry.domain.clone(),
                        count: 1,
                    }),
                }
            }
            if entry.timestamp_ms >= day_ago_ms {
                total_day += 1;
            }
        }

        // Ties keep the domain seen first during aggregation.
        let mut most_unblocked: Option<DomainCount> = None;
        for candidate in counts {
            let beats = most_unblocked
                .as_ref()
                .map(|best| candidate.count > best.count)
                .unwrap_or(true);
            if beats {
                most_unblocked = Some(candidate);
            }
        }

        let daily_average = (total_week as f64 / 7.0 * 10.0).round() / 10.0;

        Self {
            total_last_7_days: total_week,
            total_last_24_hours: total_day,
            most_unblocked,
            daily_average,
            focus_streak_days: Self::focus_streak(history, now),
        }
    }

    /// Consecutive whole days without a single unblock, walking backward from
    /// yesterday, capped at 30.
    fn focus_streak(history: &[HistoryEntry], now: DateTime<Utc>) -> u32 {
        let today_start = now.date_naive().and_time(chrono::NaiveTime::MIN).and_utc();

        let mut streak = 0u32;
        let mut day_start = today_start - Duration::days(1);

        while streak < STREAK_CAP_DAYS {
            let start_ms = day_start.timestamp_millis();
            let end_ms = (day_start + Duration::days(1)).timestamp_millis();

            let day_has_unblocks = history
                .iter()
                .any(|e| e.timestamp_ms >= start_ms && e.timestamp_ms < end_ms);
            if day_has_unblocks {
                break;
            }

            streak += 1;
            day_start -= Duration::days(1);
        }

        streak
    }
}
