use serde::{Deserialize, Serialize};

/// Identity of a pending deadline in the durable alarm service.
///
/// A domain with an active grant owns at most one `Warning` and one `Expiry`
/// alarm; `NotificationDismiss` drives auto-dismissal of transient
/// notifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmId {
    Warning { domain: String },
    Expiry { domain: String },
    NotificationDismiss { notification_id: String },
}

impl AlarmId {
    pub fn warning(domain: &str) -> Self {
        AlarmId::Warning {
            domain: domain.to_string(),
        }
    }

    pub fn expiry(domain: &str) -> Self {
        AlarmId::Expiry {
            domain: domain.to_string(),
        }
    }

    pub fn dismiss(notification_id: &str) -> Self {
        AlarmId::NotificationDismiss {
            notification_id: notification_id.to_string(),
        }
    }
}
