//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 비밀값을 로그에 남길 수 있도록 앞부분만 남기고 가립니다.
///
/// 앞에서부터 `visible`개의 문자만 보여주고 나머지는 `...`으로 대체합니다.
/// 값이 `visible`보다 짧으면 전체를 가립니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(mask_secret("C2y6yDjf5R+ob0N8A7Cgv30VRDJIWEHLM", 10), "C2y6yDjf5R...");
/// assert_eq!(mask_secret("short", 10), "...");
/// ```
pub fn mask_secret(value: &str, visible: usize) -> String {
    if value.chars().count() <= visible {
        return "...".to_string();
    }

    let prefix: String = value.chars().take(visible).collect();
    format!("{}...", prefix)
}

/// 공백을 제거한 뒤 비어있지 않은 값만 돌려줍니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 쉼표로 구분된 목록을 공백 제거 후 비어있지 않은 항목만 나눕니다.
pub fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(|item| clean_optional_string(Some(item.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("C2y6yDjf5R+ob0N8A7Cgv30VRDJIWEHLM", 10), "C2y6yDjf5R...");
        assert_eq!(mask_secret("exactly10!", 10), "...");
        assert_eq!(mask_secret("", 10), "...");
        // 멀티바이트 문자도 문자 단위로 자릅니다
        assert_eq!(mask_secret("안녕하세요반갑습니다요", 3), "안녕하...");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_split_comma_list() {
        assert_eq!(
            split_comma_list(" https://a.example , ,https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(split_comma_list("").is_empty());
    }
}
