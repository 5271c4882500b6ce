use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;

///
/// Single notification as delivered by the backend,
/// both in fetch responses and in push events.
///
/// `id` is assigned by the backend and is stable across
/// fetch and push delivery of the same event.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(rename = "icon", default)]
    pub kind: NotificationKind,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    #[serde(rename = "isRead", default)]
    pub is_read: bool,
}

///
/// Semantic category of a notification, used to select a display glyph.
///
/// The set of tags produced by the backend is open ended.
/// Unrecognized tags deserialize to [NotificationKind::System]
/// instead of failing.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Order,
    Payment,
    Offer,
    Customer,
    #[default]
    System,
}

impl NotificationKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Order => "🛒",
            NotificationKind::Payment => "💳",
            NotificationKind::Offer => "🏷️",
            NotificationKind::Customer => "👤",
            NotificationKind::System => "🔔",
        }
    }
}

impl<'de> Deserialize<'de> for NotificationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(tag.parse().unwrap_or_default())
    }
}

impl Serialize for NotificationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
