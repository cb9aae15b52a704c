//! # Domain Entities
//!
//! 문서 저장소가 소유하는 영속 데이터의 표현입니다.
//! 이 서비스는 엔티티를 읽기만 하며 생성·수정·삭제하지 않습니다.
//!
//! - [`invoices`] - 송장(factura) 문서

pub mod invoices;
