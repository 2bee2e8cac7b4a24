//! # Configuration Module
//!
//! 고객 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수(및 `PROFILE` 에 따라 로드되는 `.env` 파일)에서 읽습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, ServerConfig, StoreBackend};
//!
//! let bind = ServerConfig::bind_address();
//! let db = DatabaseConfig::from_env();
//! let store = StoreBackend::current();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export CUSTOMER_STORE="mongodb"   # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export MONGODB_DATABASE="customer_db"
//! export MONGODB_CONNECT_TIMEOUT_SECS="10"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! 숫자 값이 잘못된 경우 에러 로그를 남기고 기본값을 사용합니다.

pub mod data_config;

pub use data_config::*;
