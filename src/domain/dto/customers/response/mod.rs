//! 고객 관련 응답 DTO 모듈

pub mod customer_response;

pub use customer_response::CustomerResponse;
