use super::Error;
use crate::dto::input;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Fetch the most recent notifications addressed to the recipient class.
    ///
    /// ### Returns
    /// Vec of notifications ordered newest first
    ///
    /// ### Errors
    /// - [Error::Request] when the request could not be sent or the body could not be parsed
    /// - [Error::Status] when the backend responds with a non 2xx status
    ///
    async fn find_recent(
        &self,
        token: &str,
        recipient: &str,
        limit: u32,
    ) -> Result<Vec<input::Notification>, Error>;

    ///
    /// Persist the read flag of a single notification.
    ///
    /// ### Errors
    /// - [Error::Request] when the request could not be sent
    /// - [Error::Status] when the backend responds with a non 2xx status
    ///
    async fn update_read(&self, token: &str, recipient: &str, id: &str) -> Result<(), Error>;
}
