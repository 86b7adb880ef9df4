//! Family and membership endpoints.

use crate::models::{
    Family, FamilyCreate, FamilyMember, FamilyMemberCreate, FamilyMemberUpdate, FamilyUpdate,
    StatusMessage,
};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// Fetch the families visible to the current user
    pub async fn fetch_families(&self) -> ApiResult<Vec<Family>> {
        self.get("/families").await
    }

    pub async fn create_family(&self, data: &FamilyCreate) -> ApiResult<Family> {
        self.post("/families", data).await
    }

    pub async fn fetch_family(&self, family_id: &str) -> ApiResult<Family> {
        self.get(&format!("/families/{}", family_id)).await
    }

    pub async fn update_family(&self, family_id: &str, update: &FamilyUpdate) -> ApiResult<Family> {
        self.put(&format!("/families/{}", family_id), update).await
    }

    /// Delete a family. Only the creator may; anyone else gets a 403
    /// with the backend's detail message.
    pub async fn delete_family(&self, family_id: &str) -> ApiResult<StatusMessage> {
        self.delete(&format!("/families/{}", family_id)).await
    }

    /// Join an existing family as a regular member
    pub async fn join_family(&self, family_id: &str) -> ApiResult<StatusMessage> {
        self.post(&format!("/families/{}/join", family_id), &serde_json::json!({}))
            .await
    }

    pub async fn fetch_family_members(&self, family_id: &str) -> ApiResult<Vec<FamilyMember>> {
        self.get(&format!("/families/{}/members", family_id)).await
    }

    /// Add a member directly (admin operation)
    pub async fn add_family_member(
        &self,
        family_id: &str,
        member: &FamilyMemberCreate,
    ) -> ApiResult<FamilyMember> {
        self.post(&format!("/families/{}/members", family_id), member)
            .await
    }

    /// Update a member's role or monthly quota
    pub async fn update_family_member(
        &self,
        family_id: &str,
        member_id: &str,
        update: &FamilyMemberUpdate,
    ) -> ApiResult<FamilyMember> {
        self.put(
            &format!("/families/{}/members/{}", family_id, member_id),
            update,
        )
        .await
    }

    pub async fn remove_family_member(
        &self,
        family_id: &str,
        member_id: &str,
    ) -> ApiResult<StatusMessage> {
        self.delete(&format!("/families/{}/members/{}", family_id, member_id))
            .await
    }
}
