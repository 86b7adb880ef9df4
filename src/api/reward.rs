//! Reward application endpoints. Approval is an admin decision enforced
//! by the backend.

use crate::models::{Reward, RewardCreate, RewardUpdate, StatusMessage};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn fetch_rewards(&self) -> ApiResult<Vec<Reward>> {
        self.get("/rewards").await
    }

    pub async fn create_reward(&self, data: &RewardCreate) -> ApiResult<Reward> {
        self.post("/rewards", data).await
    }

    pub async fn fetch_reward(&self, reward_id: &str) -> ApiResult<Reward> {
        self.get(&format!("/rewards/{}", reward_id)).await
    }

    pub async fn update_reward(&self, reward_id: &str, update: &RewardUpdate) -> ApiResult<Reward> {
        self.put(&format!("/rewards/{}", reward_id), update).await
    }

    pub async fn delete_reward(&self, reward_id: &str) -> ApiResult<StatusMessage> {
        self.delete(&format!("/rewards/{}", reward_id)).await
    }
}
