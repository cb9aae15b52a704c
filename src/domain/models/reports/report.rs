//! 리포트 도메인 모델
//!
//! 요청 하나의 생명주기 동안만 존재하는 값 객체들입니다.

use crate::domain::entities::invoices::InvoiceRecord;

/// 검증을 통과한 리포트 요청
///
/// 두 필드 모두 비어있지 않은 문자열입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub username: String,
    pub directorio: String,
}

impl ReportRequest {
    pub fn new(username: impl Into<String>, directorio: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            directorio: directorio.into(),
        }
    }
}

/// 송장 집계 결과 `(건수, 합계)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InvoiceTotals {
    pub count: usize,
    pub total: f64,
}

/// 완성된 리포트
///
/// `invoice_count == invoices.len()` 이고 `total_amount`는
/// 각 송장의 [`InvoiceRecord::amount`] 합계입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportResult {
    pub username: String,
    pub directorio: String,
    pub invoice_count: usize,
    pub total_amount: f64,
    /// 저장소가 돌려준 순서 그대로의 송장 목록
    pub invoices: Vec<InvoiceRecord>,
}

impl ReportResult {
    /// 요청, 송장 목록, 집계 결과로 리포트를 만듭니다.
    pub fn new(request: ReportRequest, invoices: Vec<InvoiceRecord>, totals: InvoiceTotals) -> Self {
        debug_assert_eq!(totals.count, invoices.len());

        Self {
            username: request.username,
            directorio: request.directorio,
            invoice_count: totals.count,
            total_amount: totals.total,
            invoices,
        }
    }
}
