use crate::client::Client;
use crate::error::Result;
use crate::response::Reply;

impl Client {
    /// Groups the authenticated user belongs to.
    pub async fn get_groups(&self) -> Result<Reply> {
        self.get("/groups").await
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Reply> {
        self.get(&format!("/groups/{}", group_id)).await
    }

    pub async fn get_group_members(&self, group_id: &str) -> Result<Reply> {
        self.get(&format!("/groups/{}/members", group_id)).await
    }

    pub async fn get_group_member(&self, group_id: &str, member_id: &str) -> Result<Reply> {
        self.get(&format!("/groups/{}/members/{}", group_id, member_id))
            .await
    }
}
