use crate::api::object;
use crate::client::Client;
use crate::error::Result;
use crate::response::Reply;
use serde_json::json;

/// Event types a webhook can subscribe to.
pub const WEBHOOK_EVENTS: &[&str] = &[
    "response_completed",
    "response_disqualified",
    "response_updated",
    "response_created",
    "response_deleted",
    "response_overquota",
    "survey_created",
    "survey_updated",
    "survey_deleted",
    "collector_created",
    "collector_updated",
    "collector_deleted",
    "app_installed",
    "app_uninstalled",
];

/// A webhook subscription to create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWebhook {
    pub name: String,
    /// One of [`WEBHOOK_EVENTS`].
    pub event_type: String,
    /// `survey` or `collector`.
    pub object_type: String,
    pub object_ids: Vec<String>,
    pub subscription_url: String,
}

impl Client {
    pub async fn get_webhooks(&self) -> Result<Reply> {
        self.get("/webhooks").await
    }

    /// Subscribes `subscription_url` to an event on the given objects.
    pub async fn create_webhook(&self, webhook: &NewWebhook) -> Result<Reply> {
        let payload = object(json!({
            "name": webhook.name,
            "event_type": webhook.event_type,
            "object_type": webhook.object_type,
            "object_ids": webhook.object_ids,
            "subscription_url": webhook.subscription_url,
        }));
        self.post("/webhooks", &payload).await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Reply> {
        self.delete(&format!("/webhooks/{}", webhook_id)).await
    }
}
