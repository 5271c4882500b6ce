use super::{Error, NotificationsRepository};
use crate::dto::input;
use async_trait::async_trait;

pub struct NotificationsRepositoryImpl {
    client: reqwest::Client,
    base_url: String,
}

impl NotificationsRepositoryImpl {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::new();

        Self { client, base_url }
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn find_recent(
        &self,
        token: &str,
        recipient: &str,
        limit: u32,
    ) -> Result<Vec<input::Notification>, Error> {
        let url = format!("{}/api/notifications", self.base_url);

        tracing::trace!(recipient, limit, "fetching notifications");
        let response = self
            .client
            .get(url)
            .query(&[("recipient", recipient), ("limit", &limit.to_string())])
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let list = response.json::<input::NotificationList>().await?;
        tracing::trace!(count = list.notifications.len(), "fetched notifications");

        Ok(list.notifications)
    }

    async fn update_read(&self, token: &str, recipient: &str, id: &str) -> Result<(), Error> {
        let url = format!("{}/api/notifications/{}/read", self.base_url, id);

        tracing::trace!(id, "updating read flag");
        let response = self
            .client
            .patch(url)
            .query(&[("recipient", recipient)])
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        tracing::trace!(id, "updated read flag");

        Ok(())
    }
}
