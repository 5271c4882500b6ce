use crate::dto::input;
use serde::Serialize;
use time::OffsetDateTime;

///
/// Read only view of the notification feed handed to the UI.
///
/// `unread_count` is derived from `notifications`
/// and recomputed on every feed mutation.
///
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedSnapshot {
    pub notifications: Vec<FeedNotification>,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedNotification {
    pub id: String,
    pub title: String,
    pub message: Option<String>,
    pub kind: input::NotificationKind,
    pub glyph: &'static str,
    pub link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub is_read: bool,
}

impl From<&input::Notification> for FeedNotification {
    fn from(notification: &input::Notification) -> Self {
        Self {
            id: notification.id.clone(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.kind,
            glyph: notification.kind.glyph(),
            link: notification.link.clone(),
            created_at: notification.created_at,
            is_read: notification.is_read,
        }
    }
}
