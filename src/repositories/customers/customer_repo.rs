//! # 고객 리포지토리 포트
//!
//! 유스케이스가 소비하는 영속성 계약입니다.
//! 문서 저장소(MongoDB)나 인메모리 저장소 등 이 trait 을 구현하는 어떤 백엔드든
//! 교체하여 사용할 수 있습니다.
//!
//! ## 계약
//!
//! | 메서드 | 성공 | 실패 |
//! |--------|------|------|
//! | `create` | `()` | CPF/이메일 중복 시 `CUSTOMER_ALREADY_EXISTS` |
//! | `find_by_*` | `Some` / `None` | 부재는 에러가 아님 |
//! | `update` | `()` | 일치하는 ID 가 없으면 `CUSTOMER_NOT_FOUND` |
//! | `delete` | `()` | 일치하는 ID 가 없으면 `CUSTOMER_NOT_FOUND` |
//!
//! 그 외 인프라 실패는 `INTERNAL_ERROR` 로 반환해야 합니다.
//! 취소는 호출자가 future 를 drop 하는 방식으로 그대로 전달됩니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::customers::Customer;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 새 고객 저장
    async fn create(&self, customer: &Customer) -> AppResult<()>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>>;

    /// 정리된(숫자만) CPF 로 조회
    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Customer>>;

    /// CPF 또는 이메일 중 하나라도 일치하는 고객 하나를 반환합니다.
    async fn find_by_cpf_or_email(&self, cpf: &str, email: &str) -> AppResult<Option<Customer>>;

    /// `name`, `email`, `updated_at` 을 갱신합니다.
    async fn update(&self, customer: &Customer) -> AppResult<()>;

    async fn delete(&self, id: &str) -> AppResult<()>;
}
