//! Style values, declarations and modules.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single value inside a style declaration.
///
/// Values deserialize from plain data: strings and numbers become
/// declarations, `null` is an undefined (dropped) value and objects are
/// nested rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Absent value. Never emitted, which allows conditional styles.
    Undefined,
    /// Numeric value; receives a `px` unit unless unitless.
    Number(f64),
    /// Literal value text, emitted exactly as given.
    Text(String),
    /// A nested rule, media query or keyframes block.
    Block(Declaration),
}

impl StyleValue {
    /// Returns the nested declaration if this value is a block.
    pub fn as_block(&self) -> Option<&Declaration> {
        match self {
            StyleValue::Block(block) => Some(block),
            _ => None,
        }
    }

    /// Returns `true` for values that nest further rules.
    pub fn is_block(&self) -> bool {
        matches!(self, StyleValue::Block(_))
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        StyleValue::Text(text)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<Declaration> for StyleValue {
    fn from(block: Declaration) -> Self {
        StyleValue::Block(block)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Undefined, Into::into)
    }
}

/// The body of one style object, or of any rule nested inside it.
///
/// Keys are kept sorted so every walk over a declaration visits them in
/// ascending order, which the emitted text depends on.
///
/// # Example
///
/// ```rust
/// use objcss::Declaration;
///
/// let button = Declaration::new()
///     .set("backgroundColor", "#fff")
///     .set("padding", 16)
///     .set(":hover", Declaration::new().set("opacity", 0.8));
///
/// assert_eq!(button.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declaration {
    entries: BTreeMap<String, StyleValue>,
}

impl Declaration {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, returning the updated declaration for chaining.
    pub fn set<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a key in place, returning the previous value.
    pub fn insert<V: Into<StyleValue>>(&mut self, key: &str, value: V) -> Option<StyleValue> {
        self.entries.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Declaration {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, StyleValue)> for Declaration {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A named collection of style objects.
///
/// Object names iterate in ascending order; that order decides both the
/// order of the emitted rules and of the lookup maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleModule {
    objects: BTreeMap<String, Declaration>,
}

impl StyleModule {
    /// Creates an empty module.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a style object, returning the updated module for chaining.
    pub fn add(mut self, name: &str, declaration: Declaration) -> Self {
        self.objects.insert(name.to_string(), declaration);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.objects.get(name)
    }

    /// Returns `true` if the module defines a style object with this name.
    pub fn has(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Iterates style objects in ascending name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Declaration> {
        self.objects.iter()
    }

    /// Style object names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<(String, Declaration)> for StyleModule {
    fn from_iter<I: IntoIterator<Item = (String, Declaration)>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declaration_keys_are_sorted() {
        let decl = Declaration::new()
            .set("padding", 16)
            .set("backgroundColor", "#fff")
            .set("fontSize", 12);

        let keys: Vec<&str> = decl.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["backgroundColor", "fontSize", "padding"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut decl = Declaration::new().set("color", "red");

        assert_eq!(decl.insert("color", "blue"), Some(StyleValue::from("red")));
        assert_eq!(decl.insert("padding", 4), None);
        assert_eq!(decl.get("color"), Some(&StyleValue::from("blue")));
        assert_eq!(decl.len(), 2);
    }

    #[test]
    fn test_option_none_is_undefined() {
        let decl = Declaration::new().set("fontSize", None::<i32>);
        assert_eq!(decl.get("fontSize"), Some(&StyleValue::Undefined));
    }

    #[test]
    fn test_deserialize_value_shapes() {
        let decl: Declaration = serde_json::from_value(json!({
            "color": "red",
            "fontSize": 12,
            "lineHeight": 1.5,
            "margin": null,
            ":hover": { "color": "blue" }
        }))
        .unwrap();

        assert_eq!(decl.get("color"), Some(&StyleValue::Text("red".into())));
        assert_eq!(decl.get("fontSize"), Some(&StyleValue::Number(12.0)));
        assert_eq!(decl.get("lineHeight"), Some(&StyleValue::Number(1.5)));
        assert_eq!(decl.get("margin"), Some(&StyleValue::Undefined));
        assert!(decl.get(":hover").is_some_and(StyleValue::is_block));
    }

    #[test]
    fn test_module_names_are_sorted() {
        let module = StyleModule::new()
            .add("something", Declaration::new())
            .add("combinators", Declaration::new());

        let names: Vec<&str> = module.names().collect();
        assert_eq!(names, vec!["combinators", "something"]);
        assert!(module.has("something"));
        assert!(!module.has("missing"));
    }
}
