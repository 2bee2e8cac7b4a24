//! 고객 이름/이메일 부분 수정 유스케이스
//!
//! 조회 → 엔티티 수정(검증) → 저장 순서로 진행합니다.
//! 조회 이후 다른 요청이 고객을 삭제했다면 저장 단계에서 `CUSTOMER_NOT_FOUND` 가,
//! 다른 고객이 사용 중인 이메일로 바꾸려 했다면 유니크 제약에 의해
//! `CUSTOMER_ALREADY_EXISTS` 가 반환됩니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::providers::Clock;
use crate::domain::entities::customers::{Customer, CustomerUpdate};
use crate::repositories::customers::CustomerRepository;

pub struct UpdateCustomerUseCase {
    repo: Arc<dyn CustomerRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateCustomerUseCase {
    pub fn new(repo: Arc<dyn CustomerRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, id: &str, changes: CustomerUpdate) -> AppResult<Customer> {
        let mut customer = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::customer_not_found(format!("Customer with id {} not found", id)))?;

        let changed = customer.update(changes, self.clock.now())?;

        // 변경이 없어도 저장하여 동시 삭제를 NOT_FOUND 로 드러냄
        if let Err(e) = self.repo.update(&customer).await {
            if e.is_not_found() {
                log::warn!("고객 수정 중 삭제됨: {}", id);
            }
            return Err(e);
        }

        if changed {
            log::info!("고객 정보 수정 완료: {}", id);
        }

        Ok(customer)
    }
}
