use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::customers::Customer;
use crate::repositories::customers::customer_repo::CustomerRepository;

/// 유스케이스 테스트용 목 리포지토리
///
/// 고객 데이터를 메모리에 보관하고 메서드별 호출 횟수를 기록합니다.
/// `fail_on` 으로 특정 메서드가 지정한 에러를 반환하도록 만들 수 있습니다.
/// 유니크 제약은 검사하지 않습니다.
#[derive(Clone, Default)]
pub struct MockCustomerRepository {
    customers: Arc<Mutex<HashMap<String, Customer>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failures: Arc<Mutex<HashMap<String, AppError>>>,
}

impl MockCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        let repo = Self::new();
        for customer in customers {
            repo.add_customer(customer);
        }
        repo
    }

    pub fn add_customer(&self, customer: Customer) {
        let mut customers = self.customers.lock().unwrap();
        customers.insert(customer.id().to_string(), customer);
    }

    pub fn get_customer(&self, id: &str) -> Option<Customer> {
        self.customers.lock().unwrap().get(id).cloned()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.lock().unwrap().len()
    }

    /// 다음 호출부터 `method` 가 `error` 를 반환합니다.
    pub fn fail_on(&self, method: &str, error: AppError) {
        let mut failures = self.failures.lock().unwrap();
        failures.insert(method.to_string(), error);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> AppResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failures.lock().unwrap().get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn create(&self, customer: &Customer) -> AppResult<()> {
        self.track_call("create")?;
        self.add_customer(customer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>> {
        self.track_call("find_by_id")?;
        Ok(self.get_customer(id))
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Customer>> {
        self.track_call("find_by_cpf")?;

        let customers = self.customers.lock().unwrap();
        Ok(customers.values().find(|c| c.cpf() == cpf).cloned())
    }

    async fn find_by_cpf_or_email(&self, cpf: &str, email: &str) -> AppResult<Option<Customer>> {
        self.track_call("find_by_cpf_or_email")?;

        let customers = self.customers.lock().unwrap();
        Ok(customers
            .values()
            .find(|c| c.cpf() == cpf || c.email() == email)
            .cloned())
    }

    async fn update(&self, customer: &Customer) -> AppResult<()> {
        self.track_call("update")?;

        let mut customers = self.customers.lock().unwrap();
        match customers.get_mut(customer.id()) {
            Some(stored) => {
                *stored = customer.clone();
                Ok(())
            }
            None => Err(AppError::customer_not_found("Customer not found")),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.track_call("delete")?;

        let mut customers = self.customers.lock().unwrap();
        match customers.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::customer_not_found("Customer not found")),
        }
    }
}
