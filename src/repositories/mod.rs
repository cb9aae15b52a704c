//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 [`DocumentQuery`](crate::db::DocumentQuery)를 생성자로 주입받아
//! 도메인 쿼리를 저장소 쿼리로 바꾸고, 결과를 도메인 엔티티로 돌려줍니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::invoices::InvoiceRepository;
//!
//! let invoice_repo = InvoiceRepository::new(store);
//! let invoices = invoice_repo.find_by_owner_and_directory(&request).await?;
//! ```

pub mod invoices;
