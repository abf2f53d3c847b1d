use crate::client::Client;
use crate::error::Result;
use crate::response::Reply;

impl Client {
    /// The user who owns the access token.
    pub async fn get_authenticated_user(&self) -> Result<Reply> {
        self.get("/users/me").await
    }

    pub async fn get_user_workgroups(&self, user_id: &str) -> Result<Reply> {
        self.get(&format!("/users/{}/workgroups", user_id)).await
    }

    /// Resources other users have shared with `user_id`.
    pub async fn get_shared_resources(&self, user_id: &str) -> Result<Reply> {
        self.get(&format!("/users/{}/shared", user_id)).await
    }
}
