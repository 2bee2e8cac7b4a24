//! Customers Entity Module
//!
//! 고객 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::customers::{Customer, CustomerUpdate};
//!
//! let mut customer = Customer::new("John Doe", "111.444.777-35", "john@example.com", &ids, clock.now())?;
//! customer.update(CustomerUpdate::new(Some("Johnny".to_string()), None), clock.now())?;
//! ```

pub mod customer;

pub use customer::{Customer, CustomerUpdate};
