pub mod invoice_repo;

pub use invoice_repo::InvoiceRepository;
