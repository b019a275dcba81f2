//! Citation entry formatting
//!
//! Entries keep the Portuguese labels and pt-BR date style of the pages
//! they end up in, e.g.
//!
//! ```text
//!
//!
//! -"quoted text". Page Title.
//!     -Disponivel em: https://example.com. Acesso em: 19 de out de 2026.
//! ```

use chrono::{Datelike, NaiveDate};

const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Render a date as `DD de mmm de YYYY` (pt-BR short month, no period).
pub fn format_access_date(date: NaiveDate) -> String {
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{:02} de {} de {}", date.day(), month, date.year())
}

/// Build the citation entry appended to a page.
///
/// Newlines in `text` become single spaces. The title segment is left out
/// when `title` is empty.
pub fn format_entry(text: &str, title: &str, url: &str, date: NaiveDate) -> String {
    let quoted = text.replace('\n', " ");
    let title_info = if title.is_empty() {
        String::new()
    } else {
        format!("{}. ", title)
    };

    format!(
        "\n\n-\"{}\". {}\n\t-Disponivel em: {}. Acesso em: {}.",
        quoted,
        title_info,
        url,
        format_access_date(date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_access_date_pads_day() {
        assert_eq!(format_access_date(date(2026, 10, 9)), "09 de out de 2026");
        assert_eq!(format_access_date(date(2024, 5, 31)), "31 de mai de 2024");
        assert_eq!(format_access_date(date(2025, 12, 1)), "01 de dez de 2025");
    }

    #[test]
    fn test_all_months() {
        let rendered: Vec<String> = (1..=12)
            .map(|m| format_access_date(date(2026, m, 15)))
            .collect();
        assert_eq!(rendered[0], "15 de jan de 2026");
        assert_eq!(rendered[1], "15 de fev de 2026");
        assert_eq!(rendered[8], "15 de set de 2026");
        assert!(rendered.iter().all(|r| !r.contains('.')));
    }

    #[test]
    fn test_entry_with_title() {
        let entry = format_entry("hello\nworld", "Page", "http://x", date(2026, 10, 19));
        assert_eq!(
            entry,
            "\n\n-\"hello world\". Page. \n\t-Disponivel em: http://x. Acesso em: 19 de out de 2026."
        );
    }

    #[test]
    fn test_entry_without_title() {
        let entry = format_entry("quote", "", "http://x", date(2026, 1, 2));
        assert_eq!(
            entry,
            "\n\n-\"quote\". \n\t-Disponivel em: http://x. Acesso em: 02 de jan de 2026."
        );
    }

    #[test]
    fn test_quoted_segment_has_no_newlines() {
        let entry = format_entry("a\n\nb\nc\n", "T", "u", date(2026, 3, 3));
        let quoted = entry
            .split('"')
            .nth(1)
            .expect("entry has a quoted segment");
        assert_eq!(quoted, "a  b c ");
        assert!(!quoted.contains('\n'));
    }
}
