//! API 라우트 설정 모듈
//!
//! 고객 CRUD 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/customer` | [`handlers::customers::create_customer`] |
//! | `GET` | `/customer/{cpf}` | [`handlers::customers::get_customer_by_cpf`] |
//! | `PATCH` | `/customer/{id}` | [`handlers::customers::update_customer`] |
//! | `DELETE` | `/customer/{id}` | [`handlers::customers::delete_customer`] |
//! | `GET` | `/health` | 헬스체크 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(registry.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패는 `INVALID_REQUEST` 에러 봉투로 응답하도록
/// `JsonConfig` 를 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_customer_routes(cfg);
}

fn configure_customer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customer")
            .service(handlers::customers::create_customer)
            .service(handlers::customers::get_customer_by_cpf)
            .service(handlers::customers::update_customer)
            .service(handlers::customers::delete_customer)
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("잘못된 요청 본문 ({}): {}", req.path(), err);
    AppError::invalid_request(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "customer-service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "customer-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
