//! 송장 정산 리포트 서비스 메인 애플리케이션
//!
//! 설정을 검증하고 Cosmos DB 클라이언트를 만든 뒤 Actix-web HTTP 서버를 구동합니다.
//! 필수 설정이 없으면 요청을 받기 전에 종료합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use invoice_report_service::config::{CorsConfig, CosmosConfig, RateLimitConfig, ServerConfig};
use invoice_report_service::db::CosmosClient;
use invoice_report_service::repositories::invoices::InvoiceRepository;
use invoice_report_service::routes::configure_all_routes;
use invoice_report_service::services::reports::ReportService;
use invoice_report_service::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 송장 정산 리포트 서비스 시작중...");

    let report_service = web::Data::new(initialize_report_service()?);

    info!("✅ 리포트 서비스가 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(report_service).await
}

/// Cosmos DB 설정을 검증하고 리포트 서비스를 조립합니다
///
/// # Errors
///
/// * 필수 환경 변수 누락, 잘못된 엔드포인트/키
/// * HTTP 클라이언트 생성 실패
fn initialize_report_service() -> io::Result<ReportService> {
    let config = CosmosConfig::from_env().map_err(|e| {
        error!("❌ Cosmos DB 설정 오류: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    print_startup_summary(
        "Invoice Report Service",
        &[
            ("Endpoint", config.endpoint.clone()),
            ("Key", config.masked_key()),
            ("Database", config.database.clone()),
            ("Container", config.container.clone()),
            ("Timeout", format!("{}s", config.request_timeout.as_secs())),
        ],
    );
    info!("📡 Cosmos DB 설정 로드됨: {:?}", config);

    let client = CosmosClient::new(config).map_err(|e| {
        error!("❌ Cosmos DB 클라이언트 생성 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    Ok(ReportService::new(InvoiceRepository::new(Arc::new(client))))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(report_service: web::Data<ReportService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Report: http://{}/api/GeneradorReporte", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("❌ Rate Limiting 설정 오류: {:?}", rate_limit_config);
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND 와 RATE_LIMIT_BURST_SIZE 는 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("🔓 CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(report_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
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
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=invoice_report_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 대시보드와의 통신을 위한 CORS 설정을 구성합니다
///
/// 리포트 엔드포인트는 읽기 전용이므로 GET/POST/OPTIONS만 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
