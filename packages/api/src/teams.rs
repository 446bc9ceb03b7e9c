use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Team, TeamPayload};

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn list_teams(&self) -> ApiResult<Vec<Team>> {
        self.get("/teams/").await
    }

    pub async fn get_team(&self, id: i64) -> ApiResult<Team> {
        self.get(&format!("/teams/{id}")).await
    }

    /// Create a team. `Ok(None)` when the server did not echo the record.
    pub async fn create_team(&self, payload: &TeamPayload) -> ApiResult<Option<Team>> {
        payload.validate()?;
        self.post_echo("/teams/", payload).await
    }

    pub async fn update_team(&self, id: i64, payload: &TeamPayload) -> ApiResult<Option<Team>> {
        payload.validate()?;
        self.put_echo(&format!("/teams/{id}"), payload).await
    }

    pub async fn delete_team(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/teams/{id}")).await.map(|_| ())
    }
}
