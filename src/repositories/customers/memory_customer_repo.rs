//! 인메모리 고객 리포지토리
//!
//! MongoDB 없이 서비스를 띄우거나 HTTP 계층을 테스트할 때 사용합니다.
//! 유니크 인덱스와 동일하게 CPF/이메일 중복을 거부하며,
//! 모든 검사와 쓰기는 하나의 쓰기 락 안에서 이루어집니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::customers::Customer;
use crate::repositories::customers::customer_repo::CustomerRepository;

#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 고객 수
    pub fn len(&self) -> usize {
        self.read().map(|customers| customers.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<String, Customer>>> {
        self.customers
            .read()
            .map_err(|_| AppError::internal("Customer store lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<String, Customer>>> {
        self.customers
            .write()
            .map_err(|_| AppError::internal("Customer store lock poisoned"))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: &Customer) -> AppResult<()> {
        let mut customers = self.write()?;

        let duplicated = customers.contains_key(customer.id())
            || customers
                .values()
                .any(|c| c.cpf() == customer.cpf() || c.email() == customer.email());
        if duplicated {
            return Err(AppError::customer_already_exists());
        }

        customers.insert(customer.id().to_string(), customer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Customer>> {
        Ok(self.read()?.values().find(|c| c.cpf() == cpf).cloned())
    }

    async fn find_by_cpf_or_email(&self, cpf: &str, email: &str) -> AppResult<Option<Customer>> {
        Ok(self
            .read()?
            .values()
            .find(|c| c.cpf() == cpf || c.email() == email)
            .cloned())
    }

    async fn update(&self, customer: &Customer) -> AppResult<()> {
        let mut customers = self.write()?;

        if !customers.contains_key(customer.id()) {
            return Err(AppError::customer_not_found("Customer not found"));
        }

        let email_taken = customers
            .values()
            .any(|c| c.id() != customer.id() && c.email() == customer.email());
        if email_taken {
            return Err(AppError::customer_already_exists());
        }

        customers.insert(customer.id().to_string(), customer.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        match self.write()?.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::customer_not_found("Customer not found")),
        }
    }
}
