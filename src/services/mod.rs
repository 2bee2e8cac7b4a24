//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 고객 생명주기(생성, CPF 조회, 수정, 삭제) 유스케이스를 제공합니다.
//! 유스케이스는 `Arc<dyn CustomerRepository>` 로 저장소를 주입받으므로
//! 저장소 구현과 무관하게 동작합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::customers::CreateCustomerUseCase;
//!
//! let use_case = CreateCustomerUseCase::new(repo, Arc::new(UuidGenerator), Arc::new(SystemClock));
//! let customer = use_case.execute("John Doe", "111.444.777-35", "john@example.com").await?;
//! ```

pub mod customers;
