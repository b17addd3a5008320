//! Text normalization applied to every downloaded resource.

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Normalize a downloaded resource.
///
/// Converts CRLF and lone CR line endings to LF and drops every byte-order
/// mark character, wherever it appears.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            BYTE_ORDER_MARK => {}
            other => out.push(other),
        }
    }

    out
}
