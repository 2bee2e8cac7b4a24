//! 고객 HTTP 핸들러
//!
//! 요청 디코딩, 유스케이스 호출, 응답 변환만 담당합니다.
//! 모든 실패는 [`AppError`] 의 `ResponseError` 구현을 통해
//! `{message, statusCode, error}` 봉투로 변환됩니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::dto::customers::request::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::domain::dto::customers::response::CustomerResponse;

/// 고객 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /customer`
///
/// ```bash
/// curl -X POST http://localhost:8080/customer \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","cpf":"111.444.777-35","email":"john@example.com"}'
/// ```
///
/// # 응답
///
/// - `201 Created`: 생성된 고객
/// - `400 Bad Request`: `NAME_EMPTY`, `INVALID_CPF`, `INVALID_EMAIL`, `INVALID_REQUEST`
/// - `409 Conflict`: `CUSTOMER_ALREADY_EXISTS`
#[post("")]
pub async fn create_customer(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::invalid_request(e.to_string()))?;

    let request = payload.into_inner();
    let customer = registry
        .create_customer()
        .execute(&request.name, &request.cpf, &request.email)
        .await?;

    Ok(HttpResponse::Created().json(CustomerResponse::from(customer)))
}

/// CPF 로 고객 조회
///
/// `GET /customer/{cpf}` - 서식 문자(`.`, `-`)가 포함된 CPF 도 허용합니다.
#[get("/{cpf}")]
pub async fn get_customer_by_cpf(
    registry: web::Data<ServiceRegistry>,
    cpf: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let customer = registry.get_customer_by_cpf().execute(&cpf).await?;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(customer)))
}

/// 고객 이름/이메일 부분 수정
///
/// `PATCH /customer/{id}` - 본문에서 생략된 필드는 변경하지 않습니다.
#[patch("/{id}")]
pub async fn update_customer(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<String>,
    payload: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::invalid_request(e.to_string()))?;

    let customer = registry
        .update_customer()
        .execute(&id, payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(customer)))
}

/// 고객 삭제
///
/// `DELETE /customer/{id}` - 성공 시 `204 No Content`
#[delete("/{id}")]
pub async fn delete_customer(
    registry: web::Data<ServiceRegistry>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    registry.delete_customer().execute(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
