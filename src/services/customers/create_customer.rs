//! # 고객 생성 유스케이스
//!
//! ## 처리 흐름
//!
//! ```text
//! 엔티티 생성(검증) ──▶ CPF/이메일 중복 조회 ──▶ 저장 ──▶ 생성된 고객 반환
//!        │                    │                   │
//!        ▼                    ▼                   ▼
//!   NAME_EMPTY          CUSTOMER_ALREADY     CUSTOMER_ALREADY_EXISTS
//!   INVALID_CPF          _EXISTS             (유니크 인덱스 위반)
//!   INVALID_EMAIL                            INTERNAL_ERROR
//! ```
//!
//! 사전 조회는 빠르고 명확한 실패를 위한 것이며, 조회와 저장 사이에 끼어든
//! 동시 생성은 저장소의 유니크 제약이 최종적으로 막습니다.
//! 두 경로 모두 같은 `CUSTOMER_ALREADY_EXISTS` 코드로 보고됩니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::providers::{Clock, IdGenerator};
use crate::domain::entities::customers::Customer;
use crate::repositories::customers::CustomerRepository;

pub struct CreateCustomerUseCase {
    repo: Arc<dyn CustomerRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CreateCustomerUseCase {
    pub fn new(
        repo: Arc<dyn CustomerRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, ids, clock }
    }

    /// 새 고객을 검증하고 저장합니다.
    ///
    /// # Errors
    ///
    /// * `NAME_EMPTY` / `INVALID_CPF` / `INVALID_EMAIL` - 저장소 호출 없이 즉시 반환
    /// * `CUSTOMER_ALREADY_EXISTS` - 같은 CPF 또는 이메일의 고객이 이미 존재
    /// * `INTERNAL_ERROR` - 저장소 장애
    pub async fn execute(&self, name: &str, cpf: &str, email: &str) -> AppResult<Customer> {
        let customer = Customer::new(name, cpf, email, self.ids.as_ref(), self.clock.now())?;

        if self
            .repo
            .find_by_cpf_or_email(customer.cpf(), customer.email())
            .await?
            .is_some()
        {
            log::warn!("고객 생성 거부 (중복 CPF/이메일): {}", customer.email());
            return Err(AppError::customer_already_exists());
        }

        if let Err(e) = self.repo.create(&customer).await {
            if e.is_conflict() {
                log::warn!("고객 생성 중 동시 중복 감지: {}", customer.email());
            }
            return Err(e);
        }

        log::info!("✅ 고객 생성 완료: {} ({})", customer.id(), customer.email());
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorCode;
    use crate::core::providers::testing::{SequentialIdGenerator, SteppingClock};
    use crate::repositories::customers::mock_customer_repo::MockCustomerRepository;
    use chrono::{TimeZone, Utc};

    fn use_case(repo: &MockCustomerRepository) -> CreateCustomerUseCase {
        CreateCustomerUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(SequentialIdGenerator::default()),
            Arc::new(SteppingClock::new()),
        )
    }

    fn existing(cpf: &str, email: &str) -> Customer {
        let at = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        Customer::restore(
            "existing".to_string(),
            "Existing".to_string(),
            cpf.to_string(),
            email.to_string(),
            at,
            at,
        )
    }

    #[actix_web::test]
    async fn test_create_customer_success() {
        let repo = MockCustomerRepository::new();

        let customer = use_case(&repo)
            .execute("John Doe", "111.444.777-35", "John@Example.com")
            .await
            .unwrap();

        assert_eq!(customer.id(), "customer-1");
        assert_eq!(customer.cpf(), "11144477735");
        assert_eq!(customer.email(), "john@example.com");
        assert_eq!(repo.get_call_count("create"), 1);
        assert_eq!(repo.get_customer("customer-1"), Some(customer));
    }

    #[actix_web::test]
    async fn test_validation_failure_never_reaches_store() {
        let repo = MockCustomerRepository::new();

        let err = use_case(&repo)
            .execute("John", "12345678901", "john@example.com")
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidCpf);
        assert_eq!(repo.get_call_count("find_by_cpf_or_email"), 0);
        assert_eq!(repo.get_call_count("create"), 0);
    }

    #[actix_web::test]
    async fn test_duplicate_cpf_is_conflict_without_write() {
        let repo = MockCustomerRepository::with_customers(vec![existing("11144477735", "other@example.com")]);

        let err = use_case(&repo)
            .execute("John", "11144477735", "john@example.com")
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::CustomerAlreadyExists);
        assert_eq!(repo.get_call_count("create"), 0);
        assert_eq!(repo.customer_count(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = MockCustomerRepository::with_customers(vec![existing("52998224725", "john@example.com")]);

        let err = use_case(&repo)
            .execute("John", "11144477735", " JOHN@example.com ")
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::CustomerAlreadyExists);
        assert_eq!(repo.get_call_count("create"), 0);
    }

    #[actix_web::test]
    async fn test_store_uniqueness_violation_is_conflict() {
        let repo = MockCustomerRepository::new();
        repo.fail_on("create", AppError::customer_already_exists());

        let err = use_case(&repo)
            .execute("John", "11144477735", "john@example.com")
            .await
            .unwrap_err();

        assert_eq!(err, AppError::customer_already_exists());
    }

    #[actix_web::test]
    async fn test_store_failure_is_internal() {
        let repo = MockCustomerRepository::new();
        repo.fail_on(
            "find_by_cpf_or_email",
            AppError::internal("Failed to find customer by CPF or Email: connection refused"),
        );

        let err = use_case(&repo)
            .execute("John", "11144477735", "john@example.com")
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.message().contains("connection refused"));
        assert_eq!(repo.get_call_count("create"), 0);
    }
}
