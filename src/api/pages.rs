use crate::api::FieldDoc;
use crate::client::{Client, Payload};
use crate::error::Result;
use crate::response::Reply;

pub const PAGE_FIELDS: &[FieldDoc] = &[
    ("title", "string", "Page title"),
    ("description", "string", "Page description"),
    ("position", "integer", "Position of the page in the survey, defaults to last"),
];

impl Client {
    pub async fn get_pages(&self, survey_id: &str) -> Result<Reply> {
        self.get(&format!("/surveys/{}/pages", survey_id)).await
    }

    /// Creates an empty page. See [`PAGE_FIELDS`].
    pub async fn create_page(&self, survey_id: &str, fields: &Payload) -> Result<Reply> {
        self.post(&format!("/surveys/{}/pages", survey_id), fields)
            .await
    }

    pub async fn get_page(&self, survey_id: &str, page_id: &str) -> Result<Reply> {
        self.get(&format!("/surveys/{}/pages/{}", survey_id, page_id))
            .await
    }

    pub async fn modify_page(&self, survey_id: &str, page_id: &str, fields: &Payload) -> Result<Reply> {
        self.patch(&format!("/surveys/{}/pages/{}", survey_id, page_id), fields)
            .await
    }

    pub async fn delete_page(&self, survey_id: &str, page_id: &str) -> Result<Reply> {
        self.delete(&format!("/surveys/{}/pages/{}", survey_id, page_id))
            .await
    }
}
