//! CPF 로 고객을 조회하는 유스케이스

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::customers::Customer;
use crate::repositories::customers::CustomerRepository;
use crate::utils::validators::{clean_cpf, is_valid_cpf};

pub struct GetCustomerByCpfUseCase {
    repo: Arc<dyn CustomerRepository>,
}

impl GetCustomerByCpfUseCase {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    /// 서식이 포함된 CPF(`111.444.777-35`)도 허용합니다.
    /// 체크섬이 맞지 않으면 저장소를 조회하지 않고 `INVALID_CPF` 를 반환합니다.
    pub async fn execute(&self, cpf: &str) -> AppResult<Customer> {
        let cpf = clean_cpf(cpf);
        if !is_valid_cpf(&cpf) {
            return Err(AppError::invalid_cpf());
        }

        self.repo
            .find_by_cpf(&cpf)
            .await?
            .ok_or_else(|| AppError::customer_not_found(format!("Customer with CPF {} not found", cpf)))
    }
}
