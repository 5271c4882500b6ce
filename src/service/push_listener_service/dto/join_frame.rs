use serde::Serialize;

///
/// First frame sent after connecting. Subscribes the connection
/// to the room of a single recipient class, so the admin feed
/// does not receive events addressed to customers.
///
#[derive(Debug, Serialize)]
pub struct JoinFrame<'a> {
    pub event: &'static str,
    pub data: &'a str,
}

impl<'a> JoinFrame<'a> {
    pub fn new(recipient: &'a str) -> Self {
        Self {
            event: "joinNotifications",
            data: recipient,
        }
    }
}
