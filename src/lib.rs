//! 고객 서비스 백엔드
//!
//! 고객(이름, CPF, 이메일) 정보를 생성/조회/수정/삭제하는 REST 서비스입니다.
//! CPF 체크섬과 이메일 형태를 검증하고, CPF 와 이메일의 전역 유일성을 보장합니다.
//!
//! # Features
//!
//! - **도메인 검증**: CPF 체크섬, 이메일 형태, 이름 필수
//! - **유스케이스**: 생성 / CPF 조회 / 부분 수정 / 삭제
//! - **MongoDB**: 유니크 인덱스 기반 중복 방지
//! - **인메모리 저장소**: 로컬 개발 및 테스트용
//! - **균일한 에러 응답**: `{message, statusCode, error}`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 유스케이스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← CustomerRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use customer_service_backend::core::registry::ServiceRegistry;
//! use customer_service_backend::repositories::customers::InMemoryCustomerRepository;
//!
//! let registry = ServiceRegistry::new(Arc::new(InMemoryCustomerRepository::new()));
//! let customer = registry
//!     .create_customer()
//!     .execute("John Doe", "111.444.777-35", "john@example.com")
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
