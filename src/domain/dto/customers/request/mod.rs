//! # 고객 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 필드 길이 상한 (`validator`)
//! 3. **도메인 검증**: 이름/CPF/이메일 규칙 (엔티티)
//!
//! 1, 2단계 실패는 `INVALID_REQUEST`, 3단계 실패는 해당 도메인 코드로 응답됩니다.

pub mod create_customer;
pub mod update_customer;

pub use create_customer::CreateCustomerRequest;
pub use update_customer::UpdateCustomerRequest;
