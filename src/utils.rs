// Utility functions
use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const ALLOWED_CV_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Checked before any upload request is issued. Case-insensitive.
pub fn is_allowed_cv_file(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_CV_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Render a server timestamp for display. The API emits SQL-style
/// `YYYY-MM-DD HH:MM:SS` strings; dates and RFC 3339 are accepted too.
/// Unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%b %-d, %Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

pub fn format_salary(salary: i64) -> String {
    let digits = salary.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if salary < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

/// Per-page request sequencing. Each fetch takes a new sequence number and
/// only the response matching the latest issued number may be applied, so a
/// slow stale response can never overwrite newer page state.
#[derive(Clone, Default)]
pub struct RequestGuard {
    latest: Rc<Cell<u64>>,
}

impl RequestGuard {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.latest.get() == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_extensions() {
        assert!(is_allowed_cv_file("resume.pdf"));
        assert!(is_allowed_cv_file("resume.doc"));
        assert!(is_allowed_cv_file("resume.docx"));
        assert!(is_allowed_cv_file("RESUME.PDF"));
        assert!(is_allowed_cv_file("my.cv.Docx"));

        assert!(!is_allowed_cv_file("resume.exe"));
        assert!(!is_allowed_cv_file("resume.txt"));
        assert!(!is_allowed_cv_file("resume"));
        assert!(!is_allowed_cv_file(".pdf"));
        assert!(!is_allowed_cv_file("resume."));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05 14:30:00"), "Mar 5, 2024");
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_format_salary() {
        assert_eq!(format_salary(0), "$0");
        assert_eq!(format_salary(950), "$950");
        assert_eq!(format_salary(50000), "$50,000");
        assert_eq!(format_salary(1234567), "$1,234,567");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a description that runs long", 10), "a descr...");
    }

    #[test]
    fn stale_responses_are_not_current() {
        let guard = RequestGuard::default();
        let first = guard.issue();
        assert!(guard.is_current(first));

        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }
}
