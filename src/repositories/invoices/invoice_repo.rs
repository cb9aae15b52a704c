//! # 송장 리포지토리 구현
//!
//! 송장 문서의 조회를 담당하는 데이터 액세스 계층입니다.
//! 문서 저장소에는 [`DocumentQuery`] trait을 통해서만 접근합니다.
//!
//! ## 특징
//!
//! - **파라미터 바인딩**: 사용자 입력은 쿼리 텍스트에 절대 이어붙이지 않음
//! - **교차 파티션 조회**: 필터 키가 파티션 키와 일치한다고 가정하지 않음
//! - **순서 무보장**: 저장소가 돌려준 순서를 그대로 전달

use std::sync::Arc;

use log::debug;

use crate::db::{DocumentQuery, QueryOptions, SqlQuerySpec};
use crate::domain::entities::invoices::InvoiceRecord;
use crate::domain::models::reports::ReportRequest;
use crate::errors::AppError;

/// 소유자와 디렉터리로 송장을 찾는 쿼리 템플릿
pub const INVOICES_BY_OWNER_AND_DIRECTORY: &str =
    "SELECT * FROM c WHERE c.username = @username AND c.directorio = @directorio";

pub const USERNAME_PARAM: &str = "@username";
pub const DIRECTORIO_PARAM: &str = "@directorio";

/// 송장 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **ResourceNotFound**: 설정된 데이터베이스/컨테이너가 없음
/// - **TransientQueryError**: 그 외 저장소 실패 (재시도하지 않음)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = InvoiceRepository::new(Arc::new(CosmosClient::new(config)?));
/// let invoices = repo
///     .find_by_owner_and_directory(&ReportRequest::new("alice", "2025-04"))
///     .await?;
/// ```
#[derive(Clone)]
pub struct InvoiceRepository {
    /// 문서 저장소 질의 기능
    store: Arc<dyn DocumentQuery>,
}

impl InvoiceRepository {
    pub fn new(store: Arc<dyn DocumentQuery>) -> Self {
        Self { store }
    }

    /// 요청에 해당하는 파라미터화된 쿼리를 만듭니다.
    ///
    /// 값은 `@username`, `@directorio` 파라미터로만 전달되므로
    /// 따옴표나 SQL 키워드가 들어있어도 쿼리 구문에 영향을 주지 않습니다.
    pub fn build_query(request: &ReportRequest) -> SqlQuerySpec {
        SqlQuerySpec::new(INVOICES_BY_OWNER_AND_DIRECTORY)
            .bind(USERNAME_PARAM, request.username.as_str())
            .bind(DIRECTORIO_PARAM, request.directorio.as_str())
    }

    /// 소유자와 디렉터리가 일치하는 모든 송장 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<InvoiceRecord>)` - 일치하는 송장 (없으면 빈 목록)
    /// * `Err(AppError::ResourceNotFound)` - 데이터베이스/컨테이너 없음
    /// * `Err(AppError::TransientQueryError)` - 그 외 저장소 실패
    pub async fn find_by_owner_and_directory(
        &self,
        request: &ReportRequest,
    ) -> Result<Vec<InvoiceRecord>, AppError> {
        let spec = Self::build_query(request);

        let documents = self
            .store
            .query(&spec, &QueryOptions::cross_partition())
            .await?;

        debug!(
            "송장 조회 완료 - 사용자: {}, 디렉터리: {}, 건수: {}",
            request.username,
            request.directorio,
            documents.len()
        );

        Ok(documents.into_iter().map(InvoiceRecord::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fake::FakeDocumentQuery;
    use crate::db::QueryError;
    use serde_json::json;

    #[actix_web::test]
    async fn test_query_binds_parameters_instead_of_concatenating() {
        let store = Arc::new(FakeDocumentQuery::returning(vec![]));
        let repo = InvoiceRepository::new(store.clone());
        let hostile = ReportRequest::new("alice' OR 1=1 --", "2025-04\" OR c.username != \"");

        repo.find_by_owner_and_directory(&hostile).await.unwrap();

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        let (spec, options) = &calls[0];

        assert_eq!(spec.query, INVOICES_BY_OWNER_AND_DIRECTORY);
        assert!(!spec.query.contains("alice"));
        assert!(!spec.query.contains("2025-04"));
        assert_eq!(spec.parameter(USERNAME_PARAM), Some(&json!("alice' OR 1=1 --")));
        assert_eq!(
            spec.parameter(DIRECTORIO_PARAM),
            Some(&json!("2025-04\" OR c.username != \""))
        );
        assert!(options.enable_cross_partition);
    }

    #[actix_web::test]
    async fn test_returns_records_in_store_order() {
        let store = Arc::new(FakeDocumentQuery::returning(vec![
            json!({ "id": "b", "montoTotal": 2 }),
            json!({ "id": "a", "montoTotal": 1 }),
        ]));
        let repo = InvoiceRepository::new(store);

        let invoices = repo
            .find_by_owner_and_directory(&ReportRequest::new("alice", "2025-04"))
            .await
            .unwrap();

        let ids: Vec<_> = invoices.iter().filter_map(InvoiceRecord::id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[actix_web::test]
    async fn test_maps_store_failures() {
        let repo = InvoiceRepository::new(Arc::new(FakeDocumentQuery::failing(
            QueryError::ResourceNotFound { resource: "facturas-db/facturas".to_string() },
        )));
        let result = repo
            .find_by_owner_and_directory(&ReportRequest::new("alice", "2025-04"))
            .await;
        assert!(matches!(result, Err(AppError::ResourceNotFound(ref r)) if r == "facturas-db/facturas"));

        let repo = InvoiceRepository::new(Arc::new(FakeDocumentQuery::failing(
            QueryError::Transient("timeout".to_string()),
        )));
        let result = repo
            .find_by_owner_and_directory(&ReportRequest::new("alice", "2025-04"))
            .await;
        assert!(matches!(result, Err(AppError::TransientQueryError(_))));
    }
}
