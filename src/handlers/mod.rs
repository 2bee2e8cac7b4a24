//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 요청 디코딩/응답 변환       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Use Cases - 검증/중복 확인/저장 순서 조합        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   CustomerRepository - 데이터 접근               ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Customer - 도메인 엔티티                       ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 패턴
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_customer(
//!     registry: web::Data<ServiceRegistry>,
//!     payload: web::Json<CreateCustomerRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::invalid_request(e.to_string()))?;
//!     let customer = registry.create_customer().execute(...).await?;
//!     Ok(HttpResponse::Created().json(CustomerResponse::from(customer)))
//! }
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>` 를 반환하고,
//! 에러 응답 변환은 `AppError` 의 `ResponseError` 구현이 담당합니다.

pub mod customers;
