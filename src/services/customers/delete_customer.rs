//! 고객 삭제 유스케이스
//!
//! 삭제는 영구적이며 멱등하지 않습니다. 같은 ID 를 두 번 삭제하면
//! 두 번째 호출은 `CUSTOMER_NOT_FOUND` 로 실패합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::repositories::customers::CustomerRepository;

pub struct DeleteCustomerUseCase {
    repo: Arc<dyn CustomerRepository>,
}

impl DeleteCustomerUseCase {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> AppResult<()> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::customer_not_found(format!("Customer with id {} not found", id)));
        }

        self.repo.delete(id).await?;

        log::info!("🗑️ 고객 삭제 완료: {}", id);
        Ok(())
    }
}
