//! Request normalization pipeline
//!
//! Turns a raw `path[?query]` into the object key and cache identity the
//! storage and transform layers work with.

pub mod key;
pub mod source;

use serde::Serialize;

use crate::cache::{build_query_string, hash_parameters};
use crate::error::DecodeError;
use crate::params::{AliasTable, Parameters};

pub use key::resolve_key;
pub use source::SourceLocation;

/// A request after key resolution, alias resolution and hashing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRequest {
    /// Bucket the object is read from
    pub bucket: String,

    /// Resolved object key
    pub key: String,

    /// Parameters with every alias replaced by its canonical name
    pub params: Parameters,

    /// Display query string, security token removed
    pub query_string: String,

    /// Hash of the canonical parameter names
    pub cache_key: String,
}

/// Per-process normalization settings.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    source: SourceLocation,
    required_prefix: Option<String>,
    aliases: AliasTable,
}

impl Normalizer {
    /// Create a normalizer. Without an explicit `required_prefix`, a
    /// non-empty source prefix is required instead.
    pub fn new(source: SourceLocation, required_prefix: Option<String>, aliases: AliasTable) -> Self {
        let required_prefix = required_prefix
            .or_else(|| Some(source.prefix.clone()))
            .filter(|p| !p.is_empty());
        Self {
            source,
            required_prefix,
            aliases,
        }
    }

    pub fn source(&self) -> &SourceLocation {
        &self.source
    }

    pub fn required_prefix(&self) -> Option<&str> {
        self.required_prefix.as_deref()
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Normalize a path and its already-decoded parameters.
    ///
    /// # Errors
    /// Returns [`DecodeError`] when the path has malformed percent-encoding.
    pub fn normalize(&self, path: &str, params: Parameters) -> Result<NormalizedRequest, DecodeError> {
        let key = resolve_key(path, self.required_prefix())?;
        let params = self.aliases.resolve(params);
        let query_string = build_query_string(&params);
        let cache_key = hash_parameters(&params);

        log::debug!("Cache key for {}{}: {}", key, query_string, cache_key);

        Ok(NormalizedRequest {
            bucket: self.source.bucket.clone(),
            key,
            params,
            query_string,
            cache_key,
        })
    }

    /// Normalize a raw `path[?query]` request target.
    pub fn normalize_request(&self, request: &str) -> Result<NormalizedRequest, DecodeError> {
        let (path, query) = request.split_once('?').unwrap_or((request, ""));
        self.normalize(path, Parameters::from_query(query))
    }
}
