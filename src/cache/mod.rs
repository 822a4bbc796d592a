//! Cache identity for normalized image requests
//!
//! Two derivations over canonical parameters: a display query string for
//! logs and URLs, and a hash of the parameter names used as the cache key.

pub mod key;

pub use key::{build_query_string, hash_parameters};
