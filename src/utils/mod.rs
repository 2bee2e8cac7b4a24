//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`validators`] - CPF 정리/체크섬 검증, 이메일 정규화/형태 검증

pub mod validators;
