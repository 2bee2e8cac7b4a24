//! # MongoDB 고객 리포지토리 구현
//!
//! [`CustomerRepository`] 포트의 MongoDB 구현체입니다.
//!
//! ## 특징
//!
//! - **컬렉션**: `customers`, 문서 키는 `_id` = 고객 ID
//! - **유니크 인덱스**: `cpf_unique`, `email_unique`
//! - **동시성 보호**: 사전 조회와 저장 사이의 경쟁 상태는 유니크 인덱스가 최종적으로 차단하며,
//!   중복 키 에러(서버 코드 11000)는 `CUSTOMER_ALREADY_EXISTS` 로 변환됩니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::customers::Customer;
use crate::repositories::customers::customer_repo::CustomerRepository;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `customers` 컬렉션에 저장되는 문서 표현
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: bson::DateTime,
}

impl From<&Customer> for CustomerDocument {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            cpf: customer.cpf().to_string(),
            email: customer.email().to_string(),
            created_at: to_bson_datetime(customer.created_at()),
            updated_at: to_bson_datetime(customer.updated_at()),
        }
    }
}

impl TryFrom<CustomerDocument> for Customer {
    type Error = AppError;

    fn try_from(document: CustomerDocument) -> Result<Self, Self::Error> {
        Ok(Customer::restore(
            document.id,
            document.name,
            document.cpf,
            document.email,
            from_bson_datetime(document.created_at)?,
            from_bson_datetime(document.updated_at)?,
        ))
    }
}

fn to_bson_datetime(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(at.timestamp_millis())
}

fn from_bson_datetime(at: bson::DateTime) -> AppResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(at.timestamp_millis())
        .ok_or_else(|| AppError::internal(format!("Stored timestamp out of range: {}", at)))
}

fn is_duplicate_key_error(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// MongoDB 기반 고객 리포지토리
#[derive(Clone)]
pub struct MongoCustomerRepository {
    collection: Collection<CustomerDocument>,
}

impl MongoCustomerRepository {
    pub const COLLECTION_NAME: &'static str = "customers";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database
                .get_database()
                .collection::<CustomerDocument>(Self::COLLECTION_NAME),
        }
    }

    /// CPF / 이메일 유니크 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    /// 이미 중복 데이터가 있는 컬렉션에서는 실패합니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let cpf_index = IndexModel::builder()
            .keys(doc! { "cpf": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("cpf_unique".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([cpf_index, email_index])
            .await
            .context("Failed to create customer indexes")?;

        Ok(())
    }

    async fn find_one(&self, filter: bson::Document, what: &str) -> AppResult<Option<Customer>> {
        self.collection
            .find_one(filter)
            .await
            .with_context(|| format!("Failed to find customer by {}", what))?
            .map(Customer::try_from)
            .transpose()
    }
}

#[async_trait]
impl CustomerRepository for MongoCustomerRepository {
    async fn create(&self, customer: &Customer) -> AppResult<()> {
        match self.collection.insert_one(CustomerDocument::from(customer)).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key_error(&e) => Err(AppError::customer_already_exists()),
            Err(e) => Err(AppError::internal(format!("Failed to create customer: {}", e))),
        }
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>> {
        self.find_one(doc! { "_id": id }, "ID").await
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Customer>> {
        self.find_one(doc! { "cpf": cpf }, "CPF").await
    }

    async fn find_by_cpf_or_email(&self, cpf: &str, email: &str) -> AppResult<Option<Customer>> {
        let filter = doc! {
            "$or": [
                { "cpf": cpf },
                { "email": email },
            ]
        };
        self.find_one(filter, "CPF or Email").await
    }

    async fn update(&self, customer: &Customer) -> AppResult<()> {
        let update = doc! {
            "$set": {
                "name": customer.name(),
                "email": customer.email(),
                "updatedAt": to_bson_datetime(customer.updated_at()),
            }
        };

        let result = match self.collection.update_one(doc! { "_id": customer.id() }, update).await {
            Ok(result) => result,
            Err(e) if is_duplicate_key_error(&e) => return Err(AppError::customer_already_exists()),
            Err(e) => return Err(AppError::internal(format!("Failed to update customer: {}", e))),
        };

        if result.matched_count == 0 {
            return Err(AppError::customer_not_found("Customer not found"));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await
            .context("Failed to delete customer")?;

        if result.deleted_count == 0 {
            return Err(AppError::customer_not_found("Customer not found"));
        }

        Ok(())
    }
}
