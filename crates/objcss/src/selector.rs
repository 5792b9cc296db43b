//! Selector derivation for style objects.
//!
//! Every compiled object gets a target selector (where its rules attach), an
//! optional combinator selector (what `&` is replaced with) and a reported
//! selector (what the lookup maps record for it).

use crate::record::ConfigRecord;

/// The prefix used when neither `prepend` nor `version` is set.
pub const BARE_PREFIX: &str = ".";

/// Converts a camelCase identifier to lowercase dash-separated words.
///
/// A dash is inserted before an uppercase letter that follows a lowercase
/// letter or digit, and before the last capital of an uppercase run that
/// starts a new word. Spaces and underscores become dashes.
///
/// # Example
///
/// ```rust
/// use objcss::kebab_case;
///
/// assert_eq!(kebab_case("backgroundColor"), "background-color");
/// assert_eq!(kebab_case("WebkitTransition"), "webkit-transition");
/// assert_eq!(kebab_case("HTMLElement"), "html-element");
/// ```
pub fn kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' || c == '_' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('-') {
                out.push('-');
            }
        }

        out.extend(c.to_lowercase());
    }

    out
}

/// Computes the prefix shared by every non-overridden object in a record.
///
/// Dots in the version become dashes: `.app` with version `1.2.3` gives
/// `.app-v1-2-3`, version alone gives `.v1-2-3`, and with neither the bare
/// `.` is returned.
pub fn base_prefix(prepend: Option<&str>, version: Option<&str>) -> String {
    let version = version.map(|v| v.replace('.', "-"));
    match (prepend, version) {
        (Some(prepend), Some(version)) => format!("{}-v{}", prepend, version),
        (Some(prepend), None) => prepend.to_string(),
        (None, Some(version)) => format!(".v{}", version),
        (None, None) => BARE_PREFIX.to_string(),
    }
}

/// Selectors resolved for one style object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelector {
    /// Selector the object's own rules attach to.
    pub target: String,
    /// Replacement for `&` in the object's top-level nested keys.
    pub combinator: Option<String>,
    /// Selector recorded in the lookup maps: the explicit combinator when
    /// one is set, otherwise the target.
    pub reported: String,
}

/// Resolves the selectors for `object` within `record`.
pub fn resolve(record: &ConfigRecord, object: &str, base: &str) -> ResolvedSelector {
    let explicit = record.combinator_for(object);

    if let Some(selector) = record.override_for(object) {
        return ResolvedSelector {
            target: selector.to_string(),
            combinator: Some(explicit.unwrap_or(base).to_string()),
            reported: explicit.unwrap_or(selector).to_string(),
        };
    }

    let name = kebab_case(object);
    let target = if base.ends_with(&name) {
        base.to_string()
    } else if base == BARE_PREFIX {
        format!("{}{}", base, name)
    } else {
        format!("{}-{}", base, name)
    };

    let combinator = explicit
        .or((base != BARE_PREFIX).then_some(base))
        .map(str::to_string);
    let reported = explicit.unwrap_or(target.as_str()).to_string();

    ResolvedSelector {
        target,
        combinator,
        reported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Declaration, StyleModule};

    fn record() -> ConfigRecord {
        ConfigRecord::new(
            StyleModule::new()
                .add("something", Declaration::new())
                .add("test", Declaration::new()),
        )
    }

    #[test]
    fn test_kebab_case_words() {
        assert_eq!(kebab_case("something"), "something");
        assert_eq!(kebab_case("somethingElse"), "something-else");
        assert_eq!(kebab_case("zIndex"), "z-index");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_kebab_case_leading_capital() {
        assert_eq!(kebab_case("WebkitTransition"), "webkit-transition");
        assert_eq!(kebab_case("MozAppearance"), "moz-appearance");
    }

    #[test]
    fn test_kebab_case_acronyms_and_digits() {
        assert_eq!(kebab_case("HTMLElement"), "html-element");
        assert_eq!(kebab_case("h1Title"), "h1-title");
        assert_eq!(kebab_case("grid2Columns"), "grid2-columns");
    }

    #[test]
    fn test_kebab_case_separators() {
        assert_eq!(kebab_case("main_panel"), "main-panel");
        assert_eq!(kebab_case("main panel"), "main-panel");
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_base_prefix_variants() {
        assert_eq!(base_prefix(None, None), ".");
        assert_eq!(base_prefix(Some(".test"), None), ".test");
        assert_eq!(base_prefix(None, Some("1.2.3")), ".v1-2-3");
        assert_eq!(base_prefix(Some(".test"), Some("1.2.3")), ".test-v1-2-3");
    }

    #[test]
    fn test_resolve_bare() {
        let resolved = resolve(&record(), "something", ".");
        assert_eq!(resolved.target, ".something");
        assert_eq!(resolved.combinator, None);
        assert_eq!(resolved.reported, ".something");
    }

    #[test]
    fn test_resolve_with_prefix() {
        let resolved = resolve(&record(), "something", ".test");
        assert_eq!(resolved.target, ".test-something");
        assert_eq!(resolved.combinator.as_deref(), Some(".test"));
    }

    #[test]
    fn test_resolve_prefix_already_names_object() {
        let resolved = resolve(&record(), "test", ".test");
        assert_eq!(resolved.target, ".test");
    }

    #[test]
    fn test_resolve_override() {
        let record = record().with_override("something", "p");
        let resolved = resolve(&record, "something", ".");
        assert_eq!(resolved.target, "p");
        assert_eq!(resolved.combinator.as_deref(), Some("."));
        assert_eq!(resolved.reported, "p");
    }

    #[test]
    fn test_resolve_explicit_combinator_is_reported() {
        let record = record()
            .with_override("something", ".override")
            .with_combinator("something", ".x");
        let resolved = resolve(&record, "something", ".");
        assert_eq!(resolved.target, ".override");
        assert_eq!(resolved.combinator.as_deref(), Some(".x"));
        assert_eq!(resolved.reported, ".x");
    }
}
