//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 검증 / 미존재 / 충돌 / 내부 에러 분류
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 균일한 에러 봉투 응답
//! - **ErrorContext**: 인프라 에러를 원인 메시지와 함께 `INTERNAL_ERROR` 로 변환
//!
//! ### [`providers`] - 외부 공급자
//! - **IdGenerator**: 고객 ID 생성 (UUID v4)
//! - **Clock**: 현재 시각
//!
//! ### [`registry`] - 의존성 컨테이너
//! - **ServiceRegistry**: 저장소와 공급자를 받아 유스케이스를 조립

pub mod errors;
pub mod providers;
pub mod registry;

pub use errors::*;
pub use registry::*;
