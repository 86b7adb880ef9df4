//! Transaction ledger endpoints.

use crate::models::{
    StatusMessage, TransactionEvent, TransactionEventCreate, TransactionEventUpdate,
};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// Fetch the ledger entries visible to the current user
    pub async fn fetch_transactions(&self) -> ApiResult<Vec<TransactionEvent>> {
        self.get("/transactions").await
    }

    pub async fn create_transaction(
        &self,
        data: &TransactionEventCreate,
    ) -> ApiResult<TransactionEvent> {
        self.post("/transactions", data).await
    }

    pub async fn fetch_transaction(&self, transaction_id: &str) -> ApiResult<TransactionEvent> {
        self.get(&format!("/transactions/{}", transaction_id)).await
    }

    pub async fn update_transaction(
        &self,
        transaction_id: &str,
        update: &TransactionEventUpdate,
    ) -> ApiResult<TransactionEvent> {
        self.put(&format!("/transactions/{}", transaction_id), update)
            .await
    }

    pub async fn delete_transaction(&self, transaction_id: &str) -> ApiResult<StatusMessage> {
        self.delete(&format!("/transactions/{}", transaction_id))
            .await
    }
}
