//! Classification of declaration keys into rule kinds.

use super::value::StyleValue;

/// Metadata key that is never emitted.
pub const LABEL_KEY: &str = "label";

/// What a key inside a declaration stands for.
///
/// Every key is classified once, from its text and the shape of its value,
/// before the compiler decides how to compose selectors for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// A property with a leaf value (`fontSize: 12`).
    Declaration,
    /// `:hover`, `::before`: appended to the parent selector.
    Pseudo,
    /// `[data-open]`: a descendant attribute selector.
    Attribute,
    /// Any nested key holding `&`, replaced by the combinator selector.
    Combinator,
    /// Any other nested key, joined to the parent with a space.
    Descendant,
    /// `@media ...`, emitted as a wrapping block after the main rules.
    MediaQuery,
    /// `@keyframes ...`, emitted as a standalone block.
    Keyframes,
    /// The `label` metadata key.
    Reserved,
}

impl RuleKind {
    /// Classifies a declaration entry.
    ///
    /// Leaf values are always declarations. For nested blocks the at-rule
    /// prefixes are checked first, then pseudo selectors, then `&`, so
    /// `&[open]` and `[open] &` are combinators while a bare `[open]` is an
    /// attribute descendant.
    pub fn classify(key: &str, value: &StyleValue) -> Self {
        if key == LABEL_KEY {
            return RuleKind::Reserved;
        }
        if !value.is_block() {
            return RuleKind::Declaration;
        }

        if key.starts_with("@media") {
            RuleKind::MediaQuery
        } else if key.starts_with("@keyframes") {
            RuleKind::Keyframes
        } else if key.starts_with(':') {
            RuleKind::Pseudo
        } else if key.contains('&') {
            RuleKind::Combinator
        } else if key.starts_with('[') {
            RuleKind::Attribute
        } else {
            RuleKind::Descendant
        }
    }
}
