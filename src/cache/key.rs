//! Cache key generation using SHA-256 hashes

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};

use crate::params::{Parameters, SECURITY_TOKEN_PARAM, value_text};

/// Characters escaped when encoding a URI component. Everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Rebuild a display query string (`?k1=v1&k2=v2`) from parameters.
///
/// The security token is never included. Values are percent-encoded, names
/// are written as-is. Returns an empty string when nothing is left.
pub fn build_query_string(params: &Parameters) -> String {
    let mut query = String::new();

    for (k, v) in params.iter() {
        if k == SECURITY_TOKEN_PARAM {
            continue;
        }
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(k);
        query.push('=');
        query.extend(utf8_percent_encode(&value_text(v), URI_COMPONENT));
    }

    query
}

/// Generate a deterministic cache key from the parameter names.
///
/// The key is a SHA-256 hash of the sorted names only. Values and ordering
/// never affect it.
pub fn hash_parameters(params: &Parameters) -> String {
    let mut hasher = Sha256::new();

    // Sort names for deterministic key
    let mut names: Vec<&str> = params.keys().collect();
    names.sort_unstable();

    // Length-prefixed so no name can run into the next
    for name in names {
        hasher.update((name.len() as u64).to_be_bytes());
        hasher.update(name.as_bytes());
    }

    // Return hex-encoded hash
    format!("{:x}", hasher.finalize())
}
