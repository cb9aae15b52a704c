//! Cosmos DB 마스터 키 인증 토큰 생성
//!
//! 모든 REST 요청은 `authorization` 헤더에 다음 서명을 담아야 합니다.
//!
//! ```text
//! payload = lower(verb) \n lower(resourceType) \n resourceLink \n lower(x-ms-date) \n \n
//! sig     = base64(HMAC-SHA256(base64decode(masterKey), payload))
//! token   = urlencode("type=master&ver=1.0&sig=" + sig)
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// 디코딩된 마스터 키로 초기화된 서명기
///
/// 키 디코딩은 생성 시 한 번만 수행하고, 서명할 때마다 복제해서 사용합니다.
#[derive(Clone)]
pub struct MasterKey {
    mac: HmacSha256,
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterKey(***)")
    }
}

impl MasterKey {
    /// base64 인코딩된 마스터 키로부터 서명기를 만듭니다.
    pub fn from_base64(encoded: &str) -> Result<Self, String> {
        let decoded = STANDARD
            .decode(encoded)
            .map_err(|e| format!("master key is not valid base64: {}", e))?;
        let mac = HmacSha256::new_from_slice(&decoded)
            .map_err(|e| format!("master key cannot initialise HMAC: {}", e))?;

        Ok(Self { mac })
    }

    /// 요청 하나에 대한 `authorization` 헤더 값을 만듭니다.
    ///
    /// # Arguments
    ///
    /// * `verb` - HTTP 메서드 (`POST` 등, 대소문자 무관)
    /// * `resource_type` - 리소스 종류 (`docs`, `colls`, `dbs`)
    /// * `resource_link` - 리소스 경로 (`dbs/{db}/colls/{container}`)
    /// * `date` - `x-ms-date` 헤더와 동일한 RFC 1123 문자열
    pub fn authorization_token(
        &self,
        verb: &str,
        resource_type: &str,
        resource_link: &str,
        date: &str,
    ) -> String {
        let payload = format!(
            "{}\n{}\n{}\n{}\n\n",
            verb.to_lowercase(),
            resource_type.to_lowercase(),
            resource_link,
            date.to_lowercase()
        );

        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        urlencoding::encode(&format!("type=master&ver=1.0&sig={}", signature)).into_owned()
    }
}

/// `x-ms-date` 헤더 형식 (RFC 1123, 항상 GMT)
pub fn rfc1123_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
