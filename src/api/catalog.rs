use crate::api::FieldDoc;
use crate::client::{Client, Payload};
use crate::error::Result;
use crate::response::Reply;

pub const FOLDER_FIELDS: &[FieldDoc] = &[("title", "string", "Title for the folder")];

impl Client {
    /// Categories usable to filter survey templates.
    pub async fn get_survey_categories(&self) -> Result<Reply> {
        self.get("/survey_categories").await
    }

    pub async fn get_survey_templates(&self) -> Result<Reply> {
        self.get("/survey_templates").await
    }

    /// Languages available for survey translations.
    pub async fn get_survey_languages(&self) -> Result<Reply> {
        self.get("/survey_languages").await
    }

    pub async fn get_survey_folders(&self) -> Result<Reply> {
        self.get("/survey_folders").await
    }

    /// See [`FOLDER_FIELDS`].
    pub async fn create_survey_folder(&self, fields: &Payload) -> Result<Reply> {
        self.post("/survey_folders", fields).await
    }
}
