pub const NOTIFICATION_LIFETIME_MS: f64 = 5_000.0;
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const NOTIFICATION_SELECTOR: &str = ".notification";
pub const NOTIFICATION_HIDDEN_TRANSFORM: &str = "translateX(100%)";
pub const NOTIFICATION_SHOWN_TRANSFORM: &str = "translateX(0)";

const BASE_STYLE: &str = "position: fixed; top: 100px; right: 20px; z-index: 10000; \
    background: var(--color-surface); color: var(--color-text); padding: var(--space-16); \
    border-radius: var(--radius-lg); border: 1px solid var(--color-border); \
    box-shadow: var(--shadow-lg); max-width: 400px; transform: translateX(100%); \
    transition: transform var(--duration-normal) var(--ease-standard);";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Warning => "⚠️",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification--{}", self.as_str())
    }

    /// Inline style for the notification container. Success and error tint
    /// border and background; the other kinds keep the surface colors.
    pub fn style(self) -> String {
        match self {
            Self::Success | Self::Error => {
                let token = self.as_str();
                format!(
                    "{BASE_STYLE} border-color: var(--color-{token}); \
                     background: rgba(var(--color-{token}-rgb), 0.1);"
                )
            }
            Self::Info | Self::Warning => BASE_STYLE.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at_ms: f64,
}

impl Notification {
    pub fn expires_at_ms(&self) -> f64 {
        self.created_at_ms + NOTIFICATION_LIFETIME_MS
    }
}

/// Live notifications in creation order.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    live: Vec<Notification>,
}

impl NotificationCenter {
    pub fn push(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now_ms: f64,
    ) -> &Notification {
        self.next_id += 1;
        self.live.push(Notification {
            id: NotificationId(self.next_id),
            kind,
            message: message.into(),
            created_at_ms: now_ms,
        });
        let index = self.live.len() - 1;
        &self.live[index]
    }

    #[cfg(test)]
    pub fn live(&self) -> &[Notification] {
        &self.live
    }

    #[cfg(test)]
    pub fn is_live(&self, id: NotificationId) -> bool {
        self.live.iter().any(|notification| notification.id == id)
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.live.len();
        self.live.retain(|notification| notification.id != id);
        self.live.len() != before
    }

    pub fn dismiss_all(&mut self) -> Vec<NotificationId> {
        self.live.drain(..).map(|notification| notification.id).collect()
    }

    /// Removes every notification whose lifetime has run out at `now_ms`.
    pub fn expire(&mut self, now_ms: f64) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        self.live.retain(|notification| {
            if notification.expires_at_ms() <= now_ms {
                expired.push(notification.id);
                false
            } else {
                true
            }
        });
        expired
    }
}
