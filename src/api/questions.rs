use crate::api::FieldDoc;
use crate::client::{Client, Payload};
use crate::error::Result;
use crate::response::Reply;

/// Fields of a question body. `headings`, `family` and `subtype` are
/// required on create; `answers` is required for every type except
/// open_ended single.
pub const QUESTION_FIELDS: &[FieldDoc] = &[
    ("headings", "array", "Heading objects: heading, description, image.url, random_assignment"),
    ("position", "integer", "Position on the page, defaults to last"),
    ("family", "string", "Question family, e.g. single_choice, matrix, open_ended"),
    ("subtype", "string", "Subtype within the family"),
    ("sorting", "object", "type (default, textasc, textdesc, resp_count_asc, resp_count_desc, random, flip) and ignore_last"),
    ("required", "object", "text, type (all, at_least, at_most, exactly, range) and amount"),
    ("validation", "object", "type, text, min, max, sum, sum_text"),
    ("forced_ranking", "boolean", "Required for matrix rating or single questions"),
    ("quiz_options", "object", "scoring_enabled and feedback texts"),
    ("answers", "object", "Answer choices, rows and columns"),
    ("display_options", "object", "Required for file upload, slider, image choice and rating types"),
];

impl Client {
    pub async fn get_questions(&self, survey_id: &str, page_id: &str) -> Result<Reply> {
        self.get(&format!("/surveys/{}/pages/{}/questions", survey_id, page_id))
            .await
    }

    /// Adds a question to a page. See [`QUESTION_FIELDS`].
    pub async fn create_question(&self, survey_id: &str, page_id: &str, fields: &Payload) -> Result<Reply> {
        self.post(
            &format!("/surveys/{}/pages/{}/questions", survey_id, page_id),
            fields,
        )
        .await
    }

    pub async fn get_question(&self, survey_id: &str, page_id: &str, question_id: &str) -> Result<Reply> {
        self.get(&format!(
            "/surveys/{}/pages/{}/questions/{}",
            survey_id, page_id, question_id
        ))
        .await
    }

    pub async fn modify_question(
        &self,
        survey_id: &str,
        page_id: &str,
        question_id: &str,
        fields: &Payload,
    ) -> Result<Reply> {
        self.patch(
            &format!(
                "/surveys/{}/pages/{}/questions/{}",
                survey_id, page_id, question_id
            ),
            fields,
        )
        .await
    }

    pub async fn delete_question(&self, survey_id: &str, page_id: &str, question_id: &str) -> Result<Reply> {
        self.delete(&format!(
            "/surveys/{}/pages/{}/questions/{}",
            survey_id, page_id, question_id
        ))
        .await
    }

    /// Certified questions available to every survey.
    pub async fn get_question_bank(&self) -> Result<Reply> {
        self.get("/question_bank/questions").await
    }
}
