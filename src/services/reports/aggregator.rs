//! 송장 집계기
//!
//! 송장 목록에서 `(건수, 합계)`를 계산하는 순수 함수입니다.

use crate::domain::entities::invoices::InvoiceRecord;
use crate::domain::models::reports::InvoiceTotals;

/// 송장 건수와 금액 합계를 계산합니다.
///
/// 금액은 [`InvoiceRecord::amount`] 규칙을 따르므로 `montoTotal`이 없거나
/// 숫자가 아닌 송장은 건수에는 포함되지만 합계에는 0으로 더해집니다.
/// 덧셈 순서에 따른 부동소수점 오차는 허용합니다.
pub fn aggregate(invoices: &[InvoiceRecord]) -> InvoiceTotals {
    InvoiceTotals {
        count: invoices.len(),
        // 빈 목록의 합계는 0.0 (Sum<f64> 는 -0.0 을 돌려줌)
        total: invoices
            .iter()
            .map(InvoiceRecord::amount)
            .fold(0.0, |total, amount| total + amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records(documents: Vec<Value>) -> Vec<InvoiceRecord> {
        documents.into_iter().map(InvoiceRecord::new).collect()
    }

    #[test]
    fn test_empty_sequence() {
        let totals = aggregate(&[]);
        assert_eq!(totals, InvoiceTotals { count: 0, total: 0.0 });
        assert!(totals.total.is_sign_positive());
    }

    #[test]
    fn test_sums_amounts() {
        let invoices = records(vec![
            json!({ "id": "1", "montoTotal": 100 }),
            json!({ "id": "2", "montoTotal": 250.5 }),
        ]);

        assert_eq!(aggregate(&invoices), InvoiceTotals { count: 2, total: 350.5 });
    }

    #[test]
    fn test_malformed_amounts_count_but_add_zero() {
        let invoices = records(vec![
            json!({ "id": "1", "montoTotal": 40 }),
            json!({ "id": "2" }),
            json!({ "id": "3", "montoTotal": "12.5" }),
            json!({ "id": "4", "montoTotal": null }),
        ]);

        assert_eq!(aggregate(&invoices), InvoiceTotals { count: 4, total: 40.0 });
    }

    #[test]
    fn test_order_does_not_change_result() {
        let amounts = [0.1, 19.99, 250.5, 3.0, 1e-3, 77.77, 5.0];
        let forward = records(amounts.iter().map(|a| json!({ "montoTotal": a })).collect());
        let reversed = records(amounts.iter().rev().map(|a| json!({ "montoTotal": a })).collect());
        let mut rotated = forward.clone();
        rotated.rotate_left(3);

        let expected = aggregate(&forward);
        for other in [aggregate(&reversed), aggregate(&rotated)] {
            assert_eq!(other.count, expected.count);
            assert!((other.total - expected.total).abs() < 1e-9);
        }
    }
}
