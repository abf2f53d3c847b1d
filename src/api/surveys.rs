use crate::api::FieldDoc;
use crate::client::{Client, Payload};
use crate::error::Result;
use crate::response::Reply;
use serde_json::Value;

/// Fields accepted when creating or modifying a survey.
pub const SURVEY_FIELDS: &[FieldDoc] = &[
    ("title", "string", "Survey title, defaults to \"New Survey\""),
    ("nickname", "string", "Survey nickname"),
    ("language", "string", "Survey language, defaults to \"en\""),
    ("buttons_text", "object", "next_button, prev_button, exit_button, done_button texts; an empty exit_button hides it"),
    ("custom_variables", "object", "Dictionary of survey variables"),
    ("footer", "boolean", "If false the provider footer is hidden, defaults to true"),
    ("folder_id", "string", "Adds the survey to this folder"),
    ("quiz_options", "object", "is_quiz_mode, default_question_feedback, show_results_type, feedback ranges"),
    ("from_template_id", "string", "Template to copy from (create only)"),
    ("from_survey_id", "string", "Existing survey to copy from (create only)"),
];

impl Client {
    pub async fn get_surveys(&self) -> Result<Reply> {
        self.get("/surveys").await
    }

    pub async fn get_survey(&self, survey_id: &str) -> Result<Reply> {
        self.get(&format!("/surveys/{}", survey_id)).await
    }

    /// Expanded survey including pages and questions.
    pub async fn get_survey_details(&self, survey_id: &str) -> Result<Reply> {
        self.get(&format!("/surveys/{}/details", survey_id)).await
    }

    /// Creates a blank survey. See [`SURVEY_FIELDS`].
    pub async fn create_survey(&self, fields: &Payload) -> Result<Reply> {
        self.post("/surveys", fields).await
    }

    /// Creates a survey copied from a template or an existing survey.
    /// Omitted arguments are left out of the body.
    pub async fn copy_survey(
        &self,
        title: Option<&str>,
        from_template_id: Option<&str>,
        from_survey_id: Option<&str>,
    ) -> Result<Reply> {
        let mut payload = Payload::new();
        for (key, value) in [
            ("title", title),
            ("from_template_id", from_template_id),
            ("from_survey_id", from_survey_id),
        ] {
            if let Some(value) = value {
                payload.insert(key.to_string(), Value::from(value));
            }
        }
        self.post("/surveys", &payload).await
    }

    pub async fn modify_survey(&self, survey_id: &str, fields: &Payload) -> Result<Reply> {
        self.patch(&format!("/surveys/{}", survey_id), fields).await
    }

    pub async fn delete_survey(&self, survey_id: &str) -> Result<Reply> {
        self.delete(&format!("/surveys/{}", survey_id)).await
    }

    /// Existing translations of a survey.
    pub async fn get_survey_translations(&self, survey_id: &str) -> Result<Reply> {
        self.get(&format!("/surveys/{}/languages", survey_id)).await
    }
}
