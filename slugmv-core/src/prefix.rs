use crate::error::{Result, SlugmvError};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// Case-insensitive pattern removed from the start of a name before slugifying
#[derive(Debug, Clone, Default)]
pub struct PrefixPattern {
    regex: Option<Regex>,
}

impl PrefixPattern {
    /// Compile `pattern`. An empty or whitespace-only pattern disables removal.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Ok(Self::disabled());
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| SlugmvError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self { regex: Some(regex) })
    }

    pub fn disabled() -> Self {
        Self { regex: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.regex.is_some()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    /// Remove the leftmost match from `name`, borrowing when nothing changes.
    pub fn strip<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match &self.regex {
            Some(regex) => regex.replacen(name, 1, ""),
            None => Cow::Borrowed(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_PREFIX_PATTERN;

    #[test]
    fn test_strip_case_insensitive() {
        let prefix = PrefixPattern::new(r"^proj-01\s*").unwrap();
        assert_eq!(prefix.strip("PROJ-01 Café com Leite!!"), "Café com Leite!!");
        assert_eq!(prefix.strip("proj-01report"), "report");
    }

    #[test]
    fn test_strip_without_match_borrows() {
        let prefix = PrefixPattern::new(r"^proj-01\s*").unwrap();
        let name = "Notes proj-01";
        assert!(matches!(prefix.strip(name), Cow::Borrowed("Notes proj-01")));
    }

    #[test]
    fn test_only_first_match_removed() {
        let prefix = PrefixPattern::new(r"draft\s*").unwrap();
        assert_eq!(prefix.strip("draft one draft two"), "one draft two");
    }

    #[test]
    fn test_empty_pattern_disables() {
        for pattern in ["", "   "] {
            let prefix = PrefixPattern::new(pattern).unwrap();
            assert!(!prefix.is_enabled());
            assert_eq!(prefix.as_str(), None);
            assert_eq!(prefix.strip("xxx-xx-x Report"), "xxx-xx-x Report");
        }
    }

    #[test]
    fn test_default_pattern() {
        let prefix = PrefixPattern::new(DEFAULT_PREFIX_PATTERN).unwrap();
        assert_eq!(prefix.strip("XXX-XX-X  Annual Report"), "Annual Report");
        assert_eq!(prefix.strip("Annual Report"), "Annual Report");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PrefixPattern::new("([unclosed").unwrap_err();
        assert!(matches!(err, SlugmvError::InvalidPattern { ref pattern, .. } if pattern == "([unclosed"));
        assert!(err.is_invalid_input());
    }
}
