pub mod report;

pub use report::{InvoiceTotals, ReportRequest, ReportResult};
