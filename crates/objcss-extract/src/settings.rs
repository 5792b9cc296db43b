//! Extraction settings and the tag vocabulary.

use crate::error::{ExtractError, Result};

/// Placeholder replaced by the (escaped) object name in a style pattern.
pub const PLACEHOLDER: &str = "XXXXXX";

/// Matches an optional doc comment directly followed by the object's
/// `export const` declaration.
pub const DEFAULT_STYLE_PATTERN: &str =
    r"(?:/\*\*[^\n]*\n?(?:[ \t]*\*[^\n]*\n)*)?export const XXXXXX[\s:=]";

/// The doc comment tags the extractor looks for.
///
/// Each tag can be renamed independently; the leading `@` is optional when
/// matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tags {
    /// Replaces an object's selector (`@class .btn`).
    pub class: String,
    /// Sets an object's combinator (`@combinator .btn`).
    pub combinator: String,
    /// Marks the file-level block.
    pub config: String,
    /// Leaves an object out of the output.
    pub ignore: String,
    /// Turns on map comments (file-level block only).
    pub map: String,
    /// Sets the selector prefix (file-level block only).
    pub prepend: String,
}

impl Default for Tags {
    fn default() -> Self {
        Self {
            class: "@class".to_string(),
            combinator: "@combinator".to_string(),
            config: "@config".to_string(),
            ignore: "@ignore".to_string(),
            map: "@map".to_string(),
            prepend: "@prepend".to_string(),
        }
    }
}

impl Tags {
    /// Tag kinds accepted by [`Tags::set`].
    pub const KINDS: &'static [&'static str] =
        &["class", "combinator", "config", "ignore", "map", "prepend"];

    /// Renames the tag of the given kind.
    pub fn set(&mut self, kind: &str, tag: impl Into<String>) -> Result<()> {
        let slot = match kind {
            "class" => &mut self.class,
            "combinator" => &mut self.combinator,
            "config" => &mut self.config,
            "ignore" => &mut self.ignore,
            "map" => &mut self.map,
            "prepend" => &mut self.prepend,
            _ => {
                return Err(ExtractError::UnknownTagKind {
                    kind: kind.to_string(),
                })
            }
        };
        *slot = tag.into();
        Ok(())
    }

    /// Builder form of [`Tags::set`] for the class tag.
    pub fn with_class(mut self, tag: impl Into<String>) -> Self {
        self.class = tag.into();
        self
    }

    pub fn with_combinator(mut self, tag: impl Into<String>) -> Self {
        self.combinator = tag.into();
        self
    }

    pub fn with_ignore(mut self, tag: impl Into<String>) -> Self {
        self.ignore = tag.into();
        self
    }
}

/// Settings for [`extract`](crate::extract).
///
/// `prepend` is a fallback: a `@prepend` in the file's config block wins.
/// `map` is combined with the config block's `@map` (either turns it on).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSettings {
    pub name: Option<String>,
    pub prepend: Option<String>,
    pub version: Option<String>,
    pub map: bool,
    /// Pattern locating an object's declaration and its doc comment, with
    /// [`PLACEHOLDER`] standing in for the object name.
    pub style_pattern: Option<String>,
    pub tags: Tags,
}

impl ExtractSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_prepend(mut self, prepend: impl Into<String>) -> Self {
        self.prepend = Some(prepend.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_map(mut self, map: bool) -> Self {
        self.map = map;
        self
    }

    pub fn with_style_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.style_pattern = Some(pattern.into());
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// The style pattern in effect.
    pub fn pattern(&self) -> &str {
        match self.style_pattern.as_deref() {
            Some(pattern) if !pattern.is_empty() => pattern,
            _ => DEFAULT_STYLE_PATTERN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tags() {
        let tags = Tags::default();
        assert_eq!(tags.class, "@class");
        assert_eq!(tags.prepend, "@prepend");
    }

    #[test]
    fn test_set_tag_by_kind() {
        let mut tags = Tags::default();
        tags.set("class", "@override").unwrap();
        assert_eq!(tags.class, "@override");
        assert_eq!(tags.combinator, "@combinator");
    }

    #[test]
    fn test_set_unknown_kind() {
        let mut tags = Tags::default();
        let err = tags.set("klass", "@x").unwrap_err();
        assert!(matches!(err, ExtractError::UnknownTagKind { kind } if kind == "klass"));
    }

    #[test]
    fn test_pattern_falls_back_to_default() {
        assert_eq!(ExtractSettings::new().pattern(), DEFAULT_STYLE_PATTERN);
        assert_eq!(
            ExtractSettings::new().with_style_pattern("").pattern(),
            DEFAULT_STYLE_PATTERN
        );
        assert_eq!(
            ExtractSettings::new()
                .with_style_pattern("const XXXXXX =")
                .pattern(),
            "const XXXXXX ="
        );
    }

    #[test]
    fn test_default_pattern_has_placeholder() {
        assert!(DEFAULT_STYLE_PATTERN.contains(PLACEHOLDER));
    }
}
