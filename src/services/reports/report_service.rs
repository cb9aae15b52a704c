//! 정산 리포트 서비스
//!
//! 검증된 요청으로 송장을 조회하고 집계해 [`ReportResult`]를 만듭니다.
//! 조회 → 집계 → 조립 순서로만 진행하며, 실패하면 부분 결과 없이 에러를 돌려줍니다.

use log::info;

use crate::domain::models::reports::{ReportRequest, ReportResult};
use crate::errors::AppResult;
use crate::repositories::invoices::InvoiceRepository;
use crate::services::reports::aggregator::aggregate;

/// 리포트 생성 서비스
///
/// 요청 간 공유되는 가변 상태가 없으므로 `web::Data`로 감싸
/// 모든 워커에서 동시에 사용할 수 있습니다.
///
/// # 예제
///
/// ```rust,ignore
/// let service = ReportService::new(InvoiceRepository::new(store));
/// let report = service.generate_report(ReportRequest::new("alice", "2025-04")).await?;
/// assert_eq!(report.invoice_count, report.invoices.len());
/// ```
#[derive(Clone)]
pub struct ReportService {
    invoice_repo: InvoiceRepository,
}

impl ReportService {
    pub fn new(invoice_repo: InvoiceRepository) -> Self {
        Self { invoice_repo }
    }

    /// 리포트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ResourceNotFound` - 데이터베이스/컨테이너 없음
    /// * `AppError::TransientQueryError` - 그 외 저장소 실패
    pub async fn generate_report(&self, request: ReportRequest) -> AppResult<ReportResult> {
        let invoices = self.invoice_repo.find_by_owner_and_directory(&request).await?;
        let totals = aggregate(&invoices);

        info!(
            "리포트 생성 완료 - 사용자: {}, 디렉터리: {}, 송장: {}건, 합계: {}",
            request.username, request.directorio, totals.count, totals.total
        );

        Ok(ReportResult::new(request, invoices, totals))
    }
}
