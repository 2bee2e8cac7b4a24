//! # Application Error Handling System
//!
//! 고객 서비스 전역에서 사용하는 에러 분류 체계입니다.
//! 모든 에러는 사람이 읽을 수 있는 메시지, 심볼릭 코드, 그리고 HTTP 상태로
//! 매핑되는 카테고리를 함께 가지므로 HTTP 경계에서는 별도의 해석 없이
//! 그대로 응답 봉투(envelope)로 변환할 수 있습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | 카테고리 | 코드 | HTTP Status |
//! |----------|------|-------------|
//! | `ValidationError` | `NAME_EMPTY`, `INVALID_CPF`, `INVALID_EMAIL`, `INVALID_REQUEST` | 400 Bad Request |
//! | `NotFound` | `CUSTOMER_NOT_FOUND` | 404 Not Found |
//! | `ConflictError` | `CUSTOMER_ALREADY_EXISTS` | 409 Conflict |
//! | `InternalError` | `INTERNAL_ERROR` | 500 Internal Server Error |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "message": "Invalid CPF",
//!   "statusCode": 400,
//!   "error": "INVALID_CPF"
//! }
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorContext};
//!
//! // 검증 실패
//! return Err(AppError::invalid_cpf());
//!
//! // 인프라 에러를 INTERNAL_ERROR 로 감싸기 (원인 메시지 보존)
//! collection.insert_one(&doc).await.context("Failed to create customer")?;
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// 에러의 심볼릭 코드
///
/// 클라이언트가 분기 처리에 사용하는 안정적인 식별자입니다.
/// 같은 실패는 어떤 경로(사전 조회 / 저장소 제약)로 감지되었든 항상 같은 코드를 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NameEmpty,
    InvalidCpf,
    InvalidEmail,
    InvalidRequest,
    CustomerNotFound,
    CustomerAlreadyExists,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NameEmpty => "NAME_EMPTY",
            ErrorCode::InvalidCpf => "INVALID_CPF",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            ErrorCode::CustomerAlreadyExists => "CUSTOMER_ALREADY_EXISTS",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 검증기, 엔티티, 유스케이스, 리포지토리가 모두 이 타입을 반환합니다.
/// `Display` 는 메시지만 출력하며, 코드와 상태는 [`AppError::code`],
/// [`AppError::status_code`] 로 얻습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 저장소에 도달하기 전에 즉시 반환됩니다.
    #[error("{message}")]
    ValidationError { code: ErrorCode, message: String },

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{message}")]
    NotFound { code: ErrorCode, message: String },

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 사전 조회로 감지되었든 유니크 인덱스 위반으로 감지되었든 동일하게 표현됩니다.
    #[error("{message}")]
    ConflictError { code: ErrorCode, message: String },

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 원인 에러의 메시지는 진단을 위해 메시지 안에 보존됩니다.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn validation(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::ValidationError { code, message: message.into() }
    }

    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::NotFound { code, message: message.into() }
    }

    pub fn conflict(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::ConflictError { code, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::InternalError(message.into())
    }

    pub fn name_empty() -> Self {
        Self::validation(ErrorCode::NameEmpty, "Name cannot be empty")
    }

    pub fn invalid_cpf() -> Self {
        Self::validation(ErrorCode::InvalidCpf, "Invalid CPF")
    }

    pub fn invalid_email() -> Self {
        Self::validation(ErrorCode::InvalidEmail, "Invalid Email")
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::validation(ErrorCode::InvalidRequest, message)
    }

    pub fn customer_not_found(message: impl Into<String>) -> Self {
        Self::not_found(ErrorCode::CustomerNotFound, message)
    }

    pub fn customer_already_exists() -> Self {
        Self::conflict(ErrorCode::CustomerAlreadyExists, "Customer already exists.")
    }

    /// 심볼릭 에러 코드
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ValidationError { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::ConflictError { code, .. } => *code,
            AppError::InternalError(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::ConflictError { message, .. } => message,
            AppError::InternalError(message) => message,
        }
    }

    /// 카테고리에 대응하는 HTTP 상태
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::ConflictError { .. } => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::ConflictError { .. })
    }
}

/// HTTP 경계에서 사용하는 균일한 에러 봉투
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
    pub error: ErrorCode,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            message: error.message().to_string(),
            status_code: error.status().as_u16(),
            error: error.code(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 원인을 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if matches!(self, AppError::InternalError(_)) {
            log::error!("내부 서버 에러: {}", self.message());
        }

        actix_web::HttpResponse::build(self.status()).json(ErrorResponse::from(self))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `INTERNAL_ERROR` 로 변환하는 확장 trait
///
/// ```rust,ignore
/// let customer = collection.find_one(filter).await
///     .context("Failed to find customer by CPF")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
