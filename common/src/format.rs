use chrono::{DateTime, Utc};

/// Groups digits in threes, en-US style: `1234567` -> `"1,234,567"`.
///
/// The grouping is locale-fixed; the output feeds a Markdown report,
/// not a localized UI.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders an instant as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn timestamp(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
