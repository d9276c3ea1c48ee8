//! Parametric path patterns.

use regex::Regex;

use crate::error::{Result, RouterError};
use crate::id::IdField;

/// The placeholder token in a parametric path.
pub const PLACEHOLDER: &str = "%d";

/// A compiled path pattern with a single numeric placeholder.
#[derive(Debug, Clone)]
pub struct IdPattern {
    /// The original pattern string.
    pattern: String,
    /// Literal text before the placeholder.
    prefix: String,
    /// Literal text after the placeholder.
    suffix: String,
    /// Anchored regex with one digit-capturing group.
    regex: Regex,
}

impl IdPattern {
    /// Compiles a pattern such as `/widgets/%d/edit`.
    ///
    /// Everything except the `%d` is matched literally, so regex
    /// metacharacters in the path need no escaping by the caller. The
    /// placeholder matches one or more ASCII digits.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_dispatch::{IdField, IdPattern};
    ///
    /// let pattern = IdPattern::compile("/widgets/%d/edit").unwrap();
    /// assert_eq!(pattern.match_id("/widgets/42/edit"), Some(IdField::new(42)));
    /// assert_eq!(pattern.match_id("/widgets/abc/edit"), None);
    /// ```
    pub fn compile(pattern: &str) -> Result<Self> {
        let count = pattern.matches(PLACEHOLDER).count();
        match count {
            0 => {
                return Err(RouterError::MissingPlaceholder {
                    key: pattern.to_string(),
                })
            }
            1 => {}
            _ => {
                return Err(RouterError::MultiplePlaceholders {
                    key: pattern.to_string(),
                    count,
                })
            }
        }

        let (prefix, suffix) = pattern
            .split_once(PLACEHOLDER)
            .ok_or_else(|| RouterError::MissingPlaceholder {
                key: pattern.to_string(),
            })?;

        let regex_str = format!(
            "^{}([0-9]+){}$",
            regex::escape(prefix),
            regex::escape(suffix)
        );
        let regex = Regex::new(&regex_str).map_err(|source| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            regex,
        })
    }

    /// Matches a request path and extracts the identifier.
    ///
    /// Returns `None` when the path does not fit the pattern or when the
    /// digit run does not fit in an [`IdField`].
    pub fn match_id(&self, path: &str) -> Option<IdField> {
        let caps = self.regex.captures(path)?;
        caps.get(1)?.as_str().parse().ok()
    }

    /// Builds the concrete path for `id`.
    pub fn instantiate(&self, id: IdField) -> String {
        format!("{}{}{}", self.prefix, id, self.suffix)
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled regex.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_regex_is_anchored() {
        let pattern = IdPattern::compile("/items/%d").unwrap();
        assert_eq!(pattern.as_regex().as_str(), "^/items/([0-9]+)$");
        assert_eq!(pattern.match_id("/items/42"), Some(IdField::new(42)));
        assert_eq!(pattern.match_id("/items/42/"), None);
        assert_eq!(pattern.match_id("/v1/items/42"), None);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let pattern = IdPattern::compile("/a.b/%d/(x)+").unwrap();
        assert_eq!(pattern.match_id("/a.b/3/(x)+"), Some(IdField::new(3)));
        assert_eq!(pattern.match_id("/aXb/3/(x)+"), None);
        assert_eq!(pattern.match_id("/a.b/3/xx"), None);
    }

    #[test]
    fn test_non_digits_do_not_match() {
        let pattern = IdPattern::compile("/items/%d").unwrap();
        assert_eq!(pattern.match_id("/items/abc"), None);
        assert_eq!(pattern.match_id("/items/"), None);
        assert_eq!(pattern.match_id("/items/-1"), None);
        assert_eq!(pattern.match_id("/items/+1"), None);
        assert_eq!(pattern.match_id("/items/1a"), None);
    }

    #[test]
    fn test_leading_zeros_are_decimal() {
        let pattern = IdPattern::compile("/x/%d/y").unwrap();
        assert_eq!(pattern.match_id("/x/007/y"), Some(IdField::new(7)));
        assert_eq!(pattern.match_id("/x/010/y"), Some(IdField::new(10)));
    }

    #[test]
    fn test_overflow_is_not_a_match() {
        let pattern = IdPattern::compile("/items/%d").unwrap();
        assert_eq!(
            pattern.match_id("/items/18446744073709551615"),
            Some(IdField::new(u64::MAX))
        );
        assert_eq!(pattern.match_id("/items/18446744073709551616"), None);
    }

    #[test]
    fn test_placeholder_count() {
        assert!(matches!(
            IdPattern::compile("/items"),
            Err(RouterError::MissingPlaceholder { .. })
        ));
        assert!(matches!(
            IdPattern::compile("/a/%d/b/%d"),
            Err(RouterError::MultiplePlaceholders { count: 2, .. })
        ));
    }

    #[test]
    fn test_instantiate() {
        let pattern = IdPattern::compile("/widgets/%d/edit").unwrap();
        assert_eq!(pattern.instantiate(IdField::new(9)), "/widgets/9/edit");
        assert_eq!(pattern.pattern(), "/widgets/%d/edit");
    }
}
