use crate::client::Client;
use crate::error::Result;
use crate::response::Reply;

impl Client {
    pub async fn get_responses(&self, survey_id: &str) -> Result<Reply> {
        self.get(&format!("/surveys/{}/responses/", survey_id)).await
    }

    /// Fully expanded responses. `query` is passed through as-is, e.g.
    /// `[("per_page", "100"), ("status", "completed")]`.
    pub async fn get_responses_bulk(&self, survey_id: &str, query: &[(&str, &str)]) -> Result<Reply> {
        self.get_with_query(&format!("/surveys/{}/responses/bulk", survey_id), query)
            .await
    }

    pub async fn get_response_details(&self, survey_id: &str, response_id: &str) -> Result<Reply> {
        self.get(&format!(
            "/surveys/{}/responses/{}/details",
            survey_id, response_id
        ))
        .await
    }
}
