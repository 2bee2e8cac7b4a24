//! 고객 서비스 메인 애플리케이션
//!
//! 설정된 저장소(MongoDB 또는 메모리)를 초기화하고 Actix-web HTTP 서버를 구동합니다.
//! 첫 번째 인자로 `seed` 를 주면 서버 대신 데모 고객 데이터를 저장하고 종료합니다.
//!
//! ```bash
//! customer_service_backend          # HTTP 서버
//! customer_service_backend seed     # 데모 데이터 시딩
//! ```

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use customer_service_backend::config::{
    DatabaseConfig, Environment, RateLimitConfig, ServerConfig, StoreBackend,
};
use customer_service_backend::core::errors::AppResult;
use customer_service_backend::core::providers::{SystemClock, UuidGenerator};
use customer_service_backend::core::registry::ServiceRegistry;
use customer_service_backend::db::Database;
use customer_service_backend::db::seed::run_seed;
use customer_service_backend::repositories::customers::{
    CustomerRepository, InMemoryCustomerRepository, MongoCustomerRepository,
};
use customer_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 고객 서비스 시작중... (환경: {:?})", Environment::current());

    let repo = initialize_repository(StoreBackend::current())
        .await
        .map_err(|e| {
            error!("저장소 초기화 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    if std::env::args().nth(1).as_deref() == Some("seed") {
        run_seed(repo.as_ref(), &UuidGenerator, &SystemClock).await;
        info!("✅ 시딩 완료");
        return Ok(());
    }

    let registry = web::Data::new(ServiceRegistry::new(repo));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(registry).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: web::Data<ServiceRegistry>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(registry.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 기본값: `info,actix_web=debug`
///
/// ```bash
/// RUST_LOG=customer_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 백엔드로 고객 저장소를 초기화합니다
///
/// MongoDB 의 경우 연결 확인 후 CPF/이메일 유니크 인덱스를 생성합니다.
async fn initialize_repository(store: StoreBackend) -> AppResult<Arc<dyn CustomerRepository>> {
    match store {
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중 - 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryCustomerRepository::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&DatabaseConfig::from_env()).await?;
            let repo = MongoCustomerRepository::new(&database);
            repo.ensure_indexes().await?;

            info!("✅ 고객 컬렉션 인덱스 준비 완료 ({})", database.database_name());
            Ok(Arc::new(repo))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
