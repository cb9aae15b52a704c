//! 리포트 응답 DTO
//!
//! 대시보드가 그대로 사용하는 JSON 봉투 형식입니다.
//!
//! ```json
//! {
//!   "username": "alice",
//!   "directorio": "2025-04",
//!   "numero_facturas": 2,
//!   "monto_total_calculado": 350.5,
//!   "facturas": [ { ... }, { ... } ]
//! }
//! ```

use serde::Serialize;

use crate::domain::entities::invoices::InvoiceRecord;
use crate::domain::models::reports::ReportResult;

/// 리포트 응답 본문
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub username: String,
    pub directorio: String,
    pub numero_facturas: usize,
    pub monto_total_calculado: f64,
    pub facturas: Vec<InvoiceRecord>,
}

impl From<ReportResult> for ReportResponse {
    fn from(result: ReportResult) -> Self {
        Self {
            username: result.username,
            directorio: result.directorio,
            numero_facturas: result.invoice_count,
            monto_total_calculado: result.total_amount,
            facturas: result.invoices,
        }
    }
}
