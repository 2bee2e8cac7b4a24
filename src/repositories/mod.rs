//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 유스케이스는 [`customers::CustomerRepository`] trait 만 알고 있으며,
//! 실행 시 `CUSTOMER_STORE` 설정에 따라 구현체가 선택됩니다.
//!
//! | 구현체 | 용도 |
//! |--------|------|
//! | `MongoCustomerRepository` | 운영 (유니크 인덱스 기반 중복 방지) |
//! | `InMemoryCustomerRepository` | 로컬 개발, HTTP 테스트 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::customers::{CustomerRepository, MongoCustomerRepository};
//!
//! let repo = MongoCustomerRepository::new(&database);
//! repo.ensure_indexes().await?;
//! let customer = repo.find_by_cpf("11144477735").await?;
//! ```

pub mod customers;
