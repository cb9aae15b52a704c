//! 리포트 조회 요청 DTO
//!
//! `GET /api/GeneradorReporte?username=...&directorio=...` 의 쿼리 문자열을
//! 역직렬화하고 검증합니다.

use log::debug;
use serde::Deserialize;
use validator::Validate;

use crate::domain::models::reports::ReportRequest;
use crate::errors::AppError;

/// 리포트 조회 쿼리 파라미터
///
/// 두 파라미터 모두 필수이며, 빈 문자열은 누락과 동일하게 취급합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReportQuery {
    /// 송장 소유자
    #[validate(
        required(message = "username은(는) 필수입니다"),
        length(min = 1, message = "username은(는) 비어있을 수 없습니다")
    )]
    pub username: Option<String>,

    /// 정산 디렉터리/기간 태그 (예: `liquidacion-abril25`)
    #[validate(
        required(message = "directorio은(는) 필수입니다"),
        length(min = 1, message = "directorio은(는) 비어있을 수 없습니다")
    )]
    pub directorio: Option<String>,
}

impl ReportQuery {
    /// 검증 후 [`ReportRequest`]로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingParameter` - 파라미터가 없거나 빈 문자열인 경우
    pub fn into_request(self) -> Result<ReportRequest, AppError> {
        if let Err(e) = self.validate() {
            debug!("리포트 파라미터 검증 실패: {}", e);
            return Err(AppError::MissingParameter);
        }

        match (self.username, self.directorio) {
            (Some(username), Some(directorio)) => Ok(ReportRequest::new(username, directorio)),
            _ => Err(AppError::MissingParameter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(username: Option<&str>, directorio: Option<&str>) -> ReportQuery {
        ReportQuery {
            username: username.map(str::to_string),
            directorio: directorio.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_query_becomes_request() {
        let request = query(Some("alice"), Some("2025-04")).into_request().unwrap();
        assert_eq!(request, ReportRequest::new("alice", "2025-04"));
    }

    #[test]
    fn test_missing_or_empty_parameters_are_rejected() {
        let cases = [
            query(None, None),
            query(Some("alice"), None),
            query(None, Some("2025-04")),
            query(Some(""), Some("2025-04")),
            query(Some("alice"), Some("")),
            query(Some(""), Some("")),
        ];

        for case in cases {
            assert!(matches!(case.into_request(), Err(AppError::MissingParameter)));
        }
    }

    #[test]
    fn test_deserializes_from_query_string() {
        let parsed: ReportQuery =
            parse_query("username=elio%20villalobos&directorio=liquidacion-abril25&extra=1");

        assert_eq!(parsed.username.as_deref(), Some("elio villalobos"));
        assert_eq!(parsed.directorio.as_deref(), Some("liquidacion-abril25"));
    }

    fn parse_query(raw: &str) -> ReportQuery {
        actix_web::web::Query::<ReportQuery>::from_query(raw)
            .unwrap()
            .into_inner()
    }
}
