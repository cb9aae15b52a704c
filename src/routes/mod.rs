//! API 라우트 설정 모듈
//!
//! 정산 리포트 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `GET|POST /api/GeneradorReporte` - 정산 리포트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(report_service))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use log::warn;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// [`ReportService`](crate::services::reports::ReportService)는
/// 호출 측에서 `web::Data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_report_routes(cfg);
}

/// 정산 리포트 라우트를 설정합니다
///
/// 쿼리 문자열 자체를 해석할 수 없는 경우(예: 같은 파라미터가 두 번 들어온 경우)도
/// 파라미터 누락과 같은 400 응답으로 처리합니다.
///
/// # Examples
///
/// ```bash
/// curl "http://localhost:8080/api/GeneradorReporte?username=alice&directorio=2025-04"
/// ```
fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                warn!("쿼리 문자열 해석 실패: {}", err);
                AppError::MissingParameter.into()
            }))
            .service(handlers::reports::generate_report),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 문서 저장소에는 접근하지 않으므로 프로세스 생존 여부만 나타냅니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "invoice_report_service",
///   "version": "0.1.0",
///   "timestamp": "2025-04-07T13:05:09+00:00",
///   "features": { "database": "Cosmos DB" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "Cosmos DB"
        }
    }))
}
