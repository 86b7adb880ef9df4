//! Service marketplace endpoints.

use crate::models::{Service, ServiceCreate, ServiceUpdate, StatusMessage};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn fetch_services(&self) -> ApiResult<Vec<Service>> {
        self.get("/services").await
    }

    pub async fn create_service(&self, data: &ServiceCreate) -> ApiResult<Service> {
        self.post("/services", data).await
    }

    pub async fn fetch_service(&self, service_id: &str) -> ApiResult<Service> {
        self.get(&format!("/services/{}", service_id)).await
    }

    pub async fn update_service(
        &self,
        service_id: &str,
        update: &ServiceUpdate,
    ) -> ApiResult<Service> {
        self.put(&format!("/services/{}", service_id), update).await
    }

    pub async fn delete_service(&self, service_id: &str) -> ApiResult<StatusMessage> {
        self.delete(&format!("/services/{}", service_id)).await
    }
}
