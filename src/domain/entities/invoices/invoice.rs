//! Invoice Record Entity
//!
//! 문서 저장소에 저장된 송장(factura) 문서를 나타내는 엔티티입니다.
//! 저장소가 소유하는 스키마 없는 문서이므로 원본 JSON을 그대로 보관하고,
//! 리포트 계산에 필요한 필드만 타입이 있는 접근자로 읽습니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 송장 문서
///
/// 직렬화 시 원본 문서가 그대로 출력됩니다(`#[serde(transparent)]`).
/// 이 서비스는 문서를 읽기만 하며 수정하거나 저장하지 않습니다.
///
/// # 알려진 필드
///
/// | 필드 | 타입 | 용도 |
/// |------|------|------|
/// | `username` | string | 소유자 (필터 키) |
/// | `directorio` | string | 정산 기간/디렉터리 태그 (필터 키) |
/// | `montoTotal` | number, 선택 | 송장 금액 |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceRecord(Value);

impl InvoiceRecord {
    pub const USERNAME_FIELD: &'static str = "username";
    pub const DIRECTORIO_FIELD: &'static str = "directorio";
    pub const AMOUNT_FIELD: &'static str = "montoTotal";

    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// 원본 문서
    pub fn document(&self) -> &Value {
        &self.0
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn username(&self) -> Option<&str> {
        self.0.get(Self::USERNAME_FIELD).and_then(Value::as_str)
    }

    pub fn directorio(&self) -> Option<&str> {
        self.0.get(Self::DIRECTORIO_FIELD).and_then(Value::as_str)
    }

    /// 송장 금액
    ///
    /// `montoTotal`이 JSON 숫자일 때만 그 값을 돌려주고, 필드가 없거나
    /// 문자열·null 등 숫자가 아닌 값이면 `0.0`으로 취급합니다.
    /// 잘못된 문서 하나 때문에 리포트 전체가 실패하지 않도록 에러를 내지 않습니다.
    pub fn amount(&self) -> f64 {
        self.0
            .get(Self::AMOUNT_FIELD)
            .and_then(Value::as_f64)
            .filter(|amount| amount.is_finite())
            .unwrap_or(0.0)
    }
}

impl From<Value> for InvoiceRecord {
    fn from(document: Value) -> Self {
        Self::new(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_reads_numbers() {
        assert_eq!(InvoiceRecord::new(json!({ "montoTotal": 250.5 })).amount(), 250.5);
        assert_eq!(InvoiceRecord::new(json!({ "montoTotal": 100 })).amount(), 100.0);
        assert_eq!(InvoiceRecord::new(json!({ "montoTotal": -15 })).amount(), -15.0);
    }

    #[test]
    fn test_amount_coerces_missing_or_non_numeric_to_zero() {
        assert_eq!(InvoiceRecord::new(json!({ "id": "f-1" })).amount(), 0.0);
        assert_eq!(InvoiceRecord::new(json!({ "montoTotal": null })).amount(), 0.0);
        assert_eq!(InvoiceRecord::new(json!({ "montoTotal": "100" })).amount(), 0.0);
        assert_eq!(InvoiceRecord::new(json!({ "montoTotal": { "valor": 3 } })).amount(), 0.0);
        assert_eq!(InvoiceRecord::new(json!("no es un objeto")).amount(), 0.0);
    }

    #[test]
    fn test_known_fields() {
        let record = InvoiceRecord::new(json!({
            "id": "f-1",
            "username": "alice",
            "directorio": "2025-04",
            "montoTotal": 10
        }));

        assert_eq!(record.id(), Some("f-1"));
        assert_eq!(record.username(), Some("alice"));
        assert_eq!(record.directorio(), Some("2025-04"));
    }

    #[test]
    fn test_serializes_document_unchanged() {
        let document = json!({
            "id": "f-1",
            "montoTotal": 99.9,
            "fechaTransaccion": "2025-04-02",
            "_etag": "\"0000\"",
            "items": [{ "descripcion": "taxi", "monto": 12 }]
        });

        let record: InvoiceRecord = serde_json::from_value(document.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), document);
    }
}
