//! # Cookie parsing
//!
//! Extracts a named value from the browser's `document.cookie` string.
//! The caller supplies the raw string; this module stays DOM-free.

/// Returns the percent-decoded value of the first cookie whose name is an
/// exact match, or `None` when the store is empty or the name is absent.
///
/// Cookies arrive as `name=value` pairs separated by `; `. Whitespace around
/// each pair is trimmed, matching how browsers serialize the store.
pub fn read_cookie(cookie_str: &str, name: &str) -> Option<String> {
    if cookie_str.is_empty() {
        return None;
    }

    for pair in cookie_str.split(';') {
        let pair = pair.trim();
        let (key, value) = match pair.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };
        if key == name {
            return Some(percent_decode(value));
        }
    }
    None
}

/// Lenient percent-decoding: well-formed `%XX` sequences are decoded,
/// malformed ones pass through as literal bytes. Non-UTF-8 results decode
/// lossily rather than failing the lookup.
fn percent_decode(raw: &str) -> String {
    fn hex_val(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_exact_match() {
        let store = "sessionid=abc123; csrftoken=tok%3D42; theme=dark";
        assert_eq!(read_cookie(store, "csrftoken").as_deref(), Some("tok=42"));
        assert_eq!(read_cookie(store, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn exact_name_only() {
        // "token" must not match "csrftoken".
        let store = "csrftoken=abc; token=def";
        assert_eq!(read_cookie(store, "token").as_deref(), Some("def"));
        assert_eq!(read_cookie(store, "csrf"), None);
    }

    #[test]
    fn empty_store_and_missing_name() {
        assert_eq!(read_cookie("", "csrftoken"), None);
        assert_eq!(read_cookie("a=1; b=2", "csrftoken"), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(read_cookie("  a=1 ;  b=2", "b").as_deref(), Some("2"));
    }

    #[test]
    fn malformed_percent_passes_through() {
        assert_eq!(read_cookie("t=50%25off", "t").as_deref(), Some("50%off"));
        assert_eq!(read_cookie("t=100%", "t").as_deref(), Some("100%"));
        assert_eq!(read_cookie("t=%zz", "t").as_deref(), Some("%zz"));
    }

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(read_cookie("t=a=b=c", "t").as_deref(), Some("a=b=c"));
    }
}
