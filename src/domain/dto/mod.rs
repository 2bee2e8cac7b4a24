//! # Data Transfer Objects Module
//!
//! HTTP 경계에서 사용하는 요청/응답 데이터 구조를 정의합니다.
//! 요청 DTO 는 `serde` 역직렬화와 `validator` 기반의 구조 검증만 담당하고,
//! CPF 체크섬이나 이메일 형태 같은 도메인 규칙은 엔티티가 검증합니다.
//!
//! ```text
//! dto/
//! └── customers/
//!     ├── request/     - 고객 생성/수정 요청 DTO
//!     └── response/    - 고객 응답 DTO
//! ```

pub mod customers;
