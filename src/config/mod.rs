//! # Configuration Module
//!
//! 리포트 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`cosmos_config`] - 문서 저장소(Cosmos DB) 접속 설정, 시작 시 검증
//! - [`server_config`] - 서버 바인딩, Rate Limiting, CORS 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(마스터 키)는 환경 변수로만 제공하고, 로그에는 가려서 출력
//! - 필수 설정값 누락은 요청 단계가 아니라 시작 단계에서 실패
//! - 선택 설정값의 파싱 오류는 로그를 남기고 기본값 사용
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export CosmosDbEndpoint="https://my-account.documents.azure.com:443/"
//! export CosmosDbKey="<master key>"
//! export CosmosDbDatabaseName="facturas-db"
//! export CosmosDbContainerName="facturas"
//!
//! # 선택
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export CORS_ALLOWED_ORIGINS="https://reportes.example.com"
//! ```

pub mod cosmos_config;
pub mod server_config;

pub use cosmos_config::*;
pub use server_config::*;
