//! # Service Registry
//!
//! 애플리케이션 시작 시점에 한 번 조립되는 의존성 컨테이너입니다.
//! 선택된 저장소 백엔드와 ID/시계 공급자를 받아 네 개의 고객 유스케이스를 생성하며,
//! HTTP 계층에는 `web::Data<ServiceRegistry>` 로 공유됩니다.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │             ServiceRegistry              │
//! │  create / get_by_cpf / update / delete   │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//!        Arc<dyn CustomerRepository>
//!        (MongoDB | InMemory | Mock)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let repo: Arc<dyn CustomerRepository> = Arc::new(MongoCustomerRepository::new(&database));
//! let registry = web::Data::new(ServiceRegistry::new(repo));
//!
//! HttpServer::new(move || App::new().app_data(registry.clone()))
//! ```

use std::sync::Arc;

use crate::core::providers::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::repositories::customers::CustomerRepository;
use crate::services::customers::{
    CreateCustomerUseCase, DeleteCustomerUseCase, GetCustomerByCpfUseCase, UpdateCustomerUseCase,
};

pub struct ServiceRegistry {
    create_customer: CreateCustomerUseCase,
    get_customer_by_cpf: GetCustomerByCpfUseCase,
    update_customer: UpdateCustomerUseCase,
    delete_customer: DeleteCustomerUseCase,
}

impl ServiceRegistry {
    /// 운영용 공급자(UUID v4, 시스템 시계)로 레지스트리를 구성합니다.
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self::with_providers(repo, Arc::new(UuidGenerator), Arc::new(SystemClock))
    }

    pub fn with_providers(
        repo: Arc<dyn CustomerRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            create_customer: CreateCustomerUseCase::new(repo.clone(), ids, clock.clone()),
            get_customer_by_cpf: GetCustomerByCpfUseCase::new(repo.clone()),
            update_customer: UpdateCustomerUseCase::new(repo.clone(), clock),
            delete_customer: DeleteCustomerUseCase::new(repo),
        }
    }

    pub fn create_customer(&self) -> &CreateCustomerUseCase {
        &self.create_customer
    }

    pub fn get_customer_by_cpf(&self) -> &GetCustomerByCpfUseCase {
        &self.get_customer_by_cpf
    }

    pub fn update_customer(&self) -> &UpdateCustomerUseCase {
        &self.update_customer
    }

    pub fn delete_customer(&self) -> &DeleteCustomerUseCase {
        &self.delete_customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::customers::InMemoryCustomerRepository;

    #[actix_web::test]
    async fn test_use_cases_share_one_store() {
        let registry = ServiceRegistry::new(Arc::new(InMemoryCustomerRepository::new()));

        let created = registry
            .create_customer()
            .execute("Ana Souza", "52998224725", "ana.souza@email.com")
            .await
            .unwrap();

        let found = registry.get_customer_by_cpf().execute("52998224725").await.unwrap();
        assert_eq!(found, created);

        registry.delete_customer().execute(created.id()).await.unwrap();
        assert!(registry.get_customer_by_cpf().execute("52998224725").await.is_err());
    }
}
