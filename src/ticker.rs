//! Ticker syntax: an optional `^` (indexes), then letters, digits and `._&=-`,
//! ending in a letter or digit.

fn is_body_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '&' | '=' | '-')
}

/// Longest valid ticker at the start of `s`, as a byte length.
fn ticker_len(s: &str) -> Option<usize> {
    let caret = usize::from(s.starts_with('^'));
    let body = &s[caret..];
    let run = body.find(|c: char| !is_body_char(c)).unwrap_or(body.len());
    let trimmed = body[..run].trim_end_matches(|c: char| !c.is_ascii_alphanumeric());
    (!trimmed.is_empty()).then_some(caret + trimmed.len())
}

/// Whether `ticker` is a syntactically valid symbol, e.g. `AAPL`, `BRK.B`, `^GSPC`.
pub fn is_valid(ticker: &str) -> bool {
    ticker_len(ticker) == Some(ticker.len())
}

/// Tickers mentioned in `text` behind `marker` (usually `$`), in order of appearance.
///
/// ```
/// let found = fmp_rs::ticker::find_in_text("Long $AAPL, short $^GSPC.", "$");
/// assert_eq!(found, vec!["AAPL", "^GSPC"]);
/// ```
pub fn find_in_text<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    if marker.is_empty() {
        return Vec::new();
    }
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(marker) {
        let after = &rest[pos + marker.len()..];
        match ticker_len(after) {
            Some(len) => {
                found.push(&after[..len]);
                rest = &after[len..];
            }
            None => rest = after,
        }
    }
    found
}
