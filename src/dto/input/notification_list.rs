use super::Notification;
use serde::Deserialize;

///
/// Envelope of the fetch endpoint response.
///
/// A body without the `notifications` field degrades
/// to an empty list instead of a parse error.
///
#[derive(Debug, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}
