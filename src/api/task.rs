//! Bounty task endpoints. State transitions (open, claimed, done) are
//! validated by the backend; the client only submits the requested change.

use crate::models::{BountyTask, BountyTaskCreate, BountyTaskUpdate, StatusMessage};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn fetch_tasks(&self) -> ApiResult<Vec<BountyTask>> {
        self.get("/tasks").await
    }

    pub async fn create_task(&self, data: &BountyTaskCreate) -> ApiResult<BountyTask> {
        self.post("/tasks", data).await
    }

    pub async fn fetch_task(&self, task_id: &str) -> ApiResult<BountyTask> {
        self.get(&format!("/tasks/{}", task_id)).await
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        update: &BountyTaskUpdate,
    ) -> ApiResult<BountyTask> {
        self.put(&format!("/tasks/{}", task_id), update).await
    }

    pub async fn delete_task(&self, task_id: &str) -> ApiResult<StatusMessage> {
        self.delete(&format!("/tasks/{}", task_id)).await
    }
}
