//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 리포트 생성 과정에서 발생하는 실패를 하나의 `AppError`로 모으고,
//! `actix_web::ResponseError`를 통해 HTTP 상태 코드와 평문 메시지로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `MissingParameter` | 400 Bad Request | 필요한 파라미터 안내 |
//! | `ResourceNotFound` | 500 Internal Server Error | 없는 데이터베이스/컨테이너 이름 |
//! | `TransientQueryError` | 500 Internal Server Error | 일반 오류 메시지 |
//! | `InternalError` | 500 Internal Server Error | 일반 오류 메시지 |
//!
//! 내부 상세 정보는 로그에만 남기고 클라이언트에는 노출하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn build_report(query: ReportQuery) -> Result<ReportResult, AppError> {
//!     let request = query.into_request()?; // MissingParameter → 400
//!     let invoices = invoice_repo.find_by_owner_and_directory(&request).await?;
//!     let totals = aggregate(&invoices);
//!     Ok(ReportResult::new(request, invoices, totals))
//! }
//! ```

use actix_web::http::header::ContentType;
use thiserror::Error;

use crate::db::QueryError;

/// 파라미터 누락 시 클라이언트에게 돌려주는 안내 메시지
pub const MISSING_PARAMETER_MESSAGE: &str =
    "Por favor, proporcione los parámetros 'username' y 'directorio' en la consulta.";

/// 예상하지 못한 실패에 대한 일반 메시지
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Ocurrió un error inesperado al generar el reporte.";

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 리포트 요청이 실패할 수 있는 한 가지 원인을 나타내며,
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// `username` 또는 `directorio` 누락 (400 Bad Request)
    ///
    /// 호출자가 입력을 고쳐서 다시 요청하면 해결됩니다.
    #[error("Missing parameter: username and directorio are required")]
    MissingParameter,

    /// 설정된 데이터베이스 또는 컨테이너가 존재하지 않음 (500 Internal Server Error)
    ///
    /// 배포 설정 문제이므로 요청 단위로는 복구할 수 없습니다.
    /// 값은 `"{database}/{container}"` 형태의 리소스 이름입니다.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// 그 외 쿼리 서비스 실패 (500 Internal Server Error)
    ///
    /// 타임아웃, 스로틀링, 전송 오류 등. 이 계층에서는 재시도하지 않습니다.
    #[error("Query error: {0}")]
    TransientQueryError(String),

    /// 예상하지 못한 내부 오류 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출해도 안전한 메시지를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MissingParameter => MISSING_PARAMETER_MESSAGE.to_string(),
            AppError::ResourceNotFound(resource) => format!(
                "Error: no se encontró la base de datos o el contenedor '{}'.",
                resource
            ),
            AppError::TransientQueryError(_) | AppError::InternalError(_) => {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl From<QueryError> for AppError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::ResourceNotFound { resource } => AppError::ResourceNotFound(resource),
            QueryError::Transient(detail) => AppError::TransientQueryError(detail),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::MissingParameter => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러는 평문(`text/plain`)으로 응답하며, 본문에는
    /// [`AppError::public_message`]만 담깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.public_message())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
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
    E: std::fmt::Display,
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

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    fn body_text(error: &AppError) -> String {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_missing_parameter_response() {
        let error = AppError::MissingParameter;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(&error);
        assert!(body.contains("username"));
        assert!(body.contains("directorio"));
    }

    #[test]
    fn test_resource_not_found_names_resource() {
        let error = AppError::ResourceNotFound("facturas-db/facturas".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(&error).contains("facturas-db/facturas"));
    }

    #[test]
    fn test_transient_error_hides_detail() {
        let error = AppError::TransientQueryError("429 Too Many Requests from https://acct".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(&error);
        assert_eq!(body, UNEXPECTED_ERROR_MESSAGE);
        assert!(!body.contains("429"));
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(&error), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn test_query_error_conversion() {
        let not_found: AppError = QueryError::ResourceNotFound {
            resource: "db/container".to_string(),
        }
        .into();
        assert!(matches!(not_found, AppError::ResourceNotFound(ref r) if r == "db/container"));

        let transient: AppError = QueryError::Transient("timeout".to_string()).into();
        assert!(matches!(transient, AppError::TransientQueryError(ref d) if d == "timeout"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
