//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, MongoDB 연결, 저장소 백엔드 선택,
//! Rate Limiting 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 숫자형 환경 변수를 읽습니다.
///
/// 값이 없으면 기본값을, 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    parse_or(name, env::var(name).ok().as_deref(), default)
}

fn parse_or<T>(name: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값: 8080)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (`WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        env_or("WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE: &'static str = "customer_db";
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// - `MONGODB_URI` (기본값: `mongodb://localhost:27017`)
    /// - `MONGODB_DATABASE` (기본값: `customer_db`)
    /// - `MONGODB_CONNECT_TIMEOUT_SECS` (기본값: 10)
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string()),
            database_name: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string()),
            connect_timeout: Duration::from_secs(env_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: Self::DEFAULT_URI.to_string(),
            database_name: Self::DEFAULT_DATABASE.to_string(),
            connect_timeout: Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// 고객 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    /// 프로세스 메모리 (로컬 개발용, 재시작 시 소멸)
    Memory,
}

impl StoreBackend {
    /// `CUSTOMER_STORE` 환경 변수 (기본값: `mongodb`)
    pub fn current() -> Self {
        env::var("CUSTOMER_STORE")
            .map(|value| Self::from_str(&value))
            .unwrap_or(StoreBackend::MongoDb)
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            "mongodb" | "mongo" => StoreBackend::MongoDb,
            other => {
                error!("알 수 없는 CUSTOMER_STORE 값: {}. mongodb 사용", other);
                StoreBackend::MongoDb
            }
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("STAGE"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreBackend::from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str(" Mongo "), StoreBackend::MongoDb);
        assert_eq!(StoreBackend::from_str("postgres"), StoreBackend::MongoDb);
    }

    #[test]
    fn test_parse_or_falls_back_on_invalid_values() {
        assert_eq!(parse_or("PORT", None, 8080u16), 8080);
        assert_eq!(parse_or("PORT", Some("9090"), 8080u16), 9090);
        assert_eq!(parse_or("PORT", Some("not-a-port"), 8080u16), 8080);
        assert_eq!(parse_or("PORT", Some("70000"), 8080u16), 8080);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();

        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "customer_db");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }
}
