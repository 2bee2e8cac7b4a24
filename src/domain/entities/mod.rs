//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 생성/수정 시점에 스스로 불변식을 검증하며, 저장소 표현(BSON 문서)이나
//! HTTP 표현(JSON DTO)과는 분리되어 있습니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (Customer)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```

pub mod customers;
