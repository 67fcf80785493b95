//! Text collaborators: price display, pluralization, links, escaping.

use shoe_commerce::money::Money;

/// Format a price for display (e.g., "$130.00").
pub fn format_price(amount: &Money) -> String {
    amount.display()
}

/// Count plus noun, with an `s` unless the count is exactly one.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Route path for a shoe's detail page.
pub fn shoe_path(prefix: &str, slug: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), path_segment_encode(slug))
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn path_segment_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}
