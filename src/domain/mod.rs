//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 고객 엔티티와 그 불변식,
//! 그리고 HTTP 경계에서 사용하는 DTO 를 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - Customer (검증된 생성/수정)
//! └── DTOs          - 요청/응답 객체
//!      │
//!      ▼
//! Application Layer (Services / Use cases)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
