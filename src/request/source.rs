//! Source bucket location parsing

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Bucket and key prefix that requests are served from.
///
/// Parsed once from a `bucket[/prefix...]` configuration string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SourceLocation {
    /// Bucket identifier
    pub bucket: String,

    /// Key prefix inside the bucket, empty when absent
    pub prefix: String,
}

impl SourceLocation {
    /// Split a `bucket/prefix` string on its first `/`.
    ///
    /// Remaining separators belong to the prefix. Without a separator the
    /// whole string is the bucket and the prefix is empty.
    pub fn parse(full_path: &str) -> Self {
        let (bucket, prefix) = full_path.split_once('/').unwrap_or((full_path, ""));
        Self {
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
        }
    }
}

impl FromStr for SourceLocation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}", self.bucket)
        } else {
            write!(f, "{}/{}", self.bucket, self.prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bucket_only() {
        let source = SourceLocation::parse("bucket");
        assert_eq!(source.bucket, "bucket");
        assert_eq!(source.prefix, "");
    }

    #[test]
    fn test_parse_nested_prefix() {
        let source = SourceLocation::parse("bucket/a/b/c");
        assert_eq!(source.bucket, "bucket");
        assert_eq!(source.prefix, "a/b/c");
    }

    #[test]
    fn test_parse_trailing_separator() {
        let source = SourceLocation::parse("bucket/");
        assert_eq!(source.bucket, "bucket");
        assert_eq!(source.prefix, "");
    }

    #[test]
    fn test_parse_keeps_extra_separators_in_prefix() {
        let source = SourceLocation::parse("bucket//deep/");
        assert_eq!(source.bucket, "bucket");
        assert_eq!(source.prefix, "/deep/");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(SourceLocation::parse(""), SourceLocation::default());
    }

    #[test]
    fn test_from_str_and_display() {
        let source: SourceLocation = "media/originals/2024".parse().unwrap();
        assert_eq!(source.to_string(), "media/originals/2024");

        let bare: SourceLocation = "media".parse().unwrap();
        assert_eq!(bare.to_string(), "media");
    }
}
