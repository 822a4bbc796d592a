//! Object key resolution for incoming request paths

use std::borrow::Cow;

use crate::error::DecodeError;

/// Characters whose escapes survive URI decoding untouched.
const URI_RESERVED: &[u8] = b";/?:@&=+$,#";

/// Resolve the storage object key for a raw, percent-encoded request path.
///
/// The path is URI-decoded, one leading `/` is stripped, and when
/// `required_prefix` is non-empty the key is placed under `prefix/` unless it
/// already starts with the prefix.
///
/// # Errors
/// Returns [`DecodeError`] when the path contains a malformed escape sequence.
pub fn resolve_key(uri: &str, required_prefix: Option<&str>) -> Result<String, DecodeError> {
    let decoded = decode_uri(uri)?;
    let key = decoded.strip_prefix('/').unwrap_or(&*decoded);

    let key = match required_prefix {
        Some(prefix) if !prefix.is_empty() && !key.starts_with(prefix) => {
            format!("{}/{}", prefix, key)
        }
        _ => key.to_string(),
    };

    log::debug!("Resolved object key: {} -> {}", uri, key);
    Ok(key)
}

/// Decode percent-escapes the way a URI (not a URI component) is decoded.
///
/// Escapes that decode to a reserved character stay encoded, so `%2F` never
/// turns into a path separator. Consecutive escapes are decoded together and
/// must form valid UTF-8.
pub fn decode_uri(input: &str) -> Result<Cow<'_, str>, DecodeError> {
    if !input.contains('%') {
        return Ok(Cow::Borrowed(input));
    }

    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            let end = input[i..].find('%').map_or(bytes.len(), |offset| i + offset);
            out.push_str(&input[i..end]);
            i = end;
            continue;
        }

        let start = i;
        let mut raw = Vec::new();
        while i < bytes.len() && bytes[i] == b'%' {
            let byte = bytes
                .get(i + 1..i + 3)
                .and_then(hex_pair)
                .ok_or(DecodeError::InvalidEscape(i))?;
            raw.push(byte);
            i += 3;
        }

        let text = std::str::from_utf8(&raw).map_err(|_| DecodeError::InvalidUtf8(start))?;

        // Every decoded byte came from exactly three input bytes.
        let mut escape = start;
        for ch in text.chars() {
            let width = ch.len_utf8() * 3;
            if ch.is_ascii() && URI_RESERVED.contains(&(ch as u8)) {
                out.push_str(&input[escape..escape + width]);
            } else {
                out.push(ch);
            }
            escape += width;
        }
    }

    Ok(Cow::Owned(out))
}

fn hex_pair(pair: &[u8]) -> Option<u8> {
    let hi = (pair[0] as char).to_digit(16)?;
    let lo = (pair[1] as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_key_strips_leading_slash() {
        assert_eq!(resolve_key("/photos/cat.jpg", None).unwrap(), "photos/cat.jpg");
        assert_eq!(resolve_key("photos/cat.jpg", None).unwrap(), "photos/cat.jpg");
    }

    #[test]
    fn test_resolve_key_strips_only_one_slash() {
        assert_eq!(resolve_key("//cat.jpg", None).unwrap(), "/cat.jpg");
    }

    #[test]
    fn test_leading_slash_is_irrelevant() {
        let paths = ["cat.jpg", "a/b/c.png", "originals/cat.jpg", "caf%C3%A9.jpg", ""];
        let prefixes = [None, Some(""), Some("originals")];

        for path in paths {
            for prefix in prefixes {
                assert_eq!(
                    resolve_key(&format!("/{}", path), prefix).unwrap(),
                    resolve_key(path, prefix).unwrap(),
                    "path {:?} prefix {:?}",
                    path,
                    prefix
                );
            }
        }
    }

    #[test]
    fn test_resolve_key_adds_missing_prefix() {
        assert_eq!(
            resolve_key("/cat.jpg", Some("originals")).unwrap(),
            "originals/cat.jpg"
        );
    }

    #[test]
    fn test_resolve_key_no_double_prefix() {
        assert_eq!(
            resolve_key("/originals/cat.jpg", Some("originals")).unwrap(),
            "originals/cat.jpg"
        );
        assert_eq!(
            resolve_key("originals/a%20b.jpg", Some("originals")).unwrap(),
            "originals/a b.jpg"
        );
    }

    #[test]
    fn test_resolve_key_prefix_is_plain_string_match() {
        // Only a string prefix check, not a path-segment check
        assert_eq!(
            resolve_key("originals-2024/cat.jpg", Some("originals")).unwrap(),
            "originals-2024/cat.jpg"
        );
    }

    #[test]
    fn test_resolve_key_empty_prefix_ignored() {
        assert_eq!(resolve_key("/cat.jpg", Some("")).unwrap(), "cat.jpg");
    }

    #[test]
    fn test_resolve_key_decodes_path() {
        assert_eq!(resolve_key("/caf%C3%A9%20au%20lait.jpg", None).unwrap(), "café au lait.jpg");
    }

    #[test]
    fn test_resolve_key_propagates_decode_error() {
        assert_eq!(resolve_key("/bad%zz.jpg", None), Err(DecodeError::InvalidEscape(4)));
    }

    #[test]
    fn test_decode_uri_borrows_when_unescaped() {
        assert!(matches!(decode_uri("plain/path.jpg").unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_uri_keeps_reserved_escapes() {
        assert_eq!(decode_uri("a%2Fb%3fc%23d").unwrap(), "a%2Fb%3fc%23d");
        assert_eq!(decode_uri("a%2F%41").unwrap(), "a%2FA");
    }

    #[test]
    fn test_decode_uri_decodes_unreserved() {
        assert_eq!(decode_uri("%41%62c%7E").unwrap(), "Abc~");
        assert_eq!(decode_uri("%E2%82%AC").unwrap(), "€");
    }

    #[test]
    fn test_decode_uri_truncated_escape() {
        assert_eq!(decode_uri("abc%"), Err(DecodeError::InvalidEscape(3)));
        assert_eq!(decode_uri("abc%4"), Err(DecodeError::InvalidEscape(3)));
    }

    #[test]
    fn test_decode_uri_invalid_utf8() {
        assert_eq!(decode_uri("x%E2%82"), Err(DecodeError::InvalidUtf8(1)));
        assert_eq!(decode_uri("%FF"), Err(DecodeError::InvalidUtf8(0)));
    }
}
