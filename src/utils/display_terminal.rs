//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 적용된 설정을 박스 제목과 트리 형태로 보여줍니다.
//! 문자열을 만드는 함수와 실제로 출력하는 함수를 나눠 두어 포맷을 테스트할 수 있습니다.

/// 박스 내부 콘텐츠 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// 텍스트는 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             Invoice Report Service              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        width = CONTENT_WIDTH
    )
}

/// 이름/값 쌍을 들여쓰기된 트리 줄로 만듭니다
///
/// ```text
///    ├─ Endpoint: https://acct.documents.azure.com
///    └─ Container: facturas
/// ```
pub fn sub_task_lines(entries: &[(&str, String)]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            let branch = if i + 1 == entries.len() { "└─" } else { "├─" };
            format!("   {} {}: {}", branch, name, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 시작 요약을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_startup_summary;
///
/// print_startup_summary("Invoice Report Service", &[
///     ("Bind", "0.0.0.0:8080".to_string()),
///     ("Database", "facturas-db".to_string()),
/// ]);
/// ```
pub fn print_startup_summary(title: &str, entries: &[(&str, String)]) {
    println!();
    println!("{}", boxed_title(title));
    println!("{}", sub_task_lines(entries));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let boxed = boxed_title("OK");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(lines[1].trim_matches('║').trim(), "OK");
    }

    #[test]
    fn test_sub_task_lines_marks_last_entry() {
        let lines = sub_task_lines(&[
            ("Database", "facturas-db".to_string()),
            ("Container", "facturas".to_string()),
        ]);

        assert_eq!(
            lines,
            "   ├─ Database: facturas-db\n   └─ Container: facturas"
        );
        assert_eq!(sub_task_lines(&[]), "");
    }
}
