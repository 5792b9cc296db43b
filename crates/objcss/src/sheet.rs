//! Compiled stylesheets and their lookup maps.

use indexmap::IndexMap;
use log::warn;
use serde::Serialize;

/// The output of compiling one [`ConfigRecord`](crate::ConfigRecord).
///
/// Both maps iterate in ascending style object name order, the order the
/// objects were compiled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledSheet {
    pub name: Option<String>,
    pub css: String,
    #[serde(rename = "objectToStyleMap")]
    pub object_to_style: IndexMap<String, String>,
    #[serde(rename = "styleToObjectMap")]
    pub style_to_object: IndexMap<String, String>,
}

impl CompiledSheet {
    /// Creates an empty sheet carrying the record's name.
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Records that `object` is reachable through `selector`.
    ///
    /// When a selector is already claimed by another object the later
    /// object wins in the reverse map and the entry moves to the end, so
    /// both maps follow compile order; the collision is logged.
    pub(crate) fn record_selector(&mut self, object: &str, selector: &str) {
        self.object_to_style
            .insert(object.to_string(), selector.to_string());

        let previous = self.style_to_object.shift_remove(selector);
        self.style_to_object
            .insert(selector.to_string(), object.to_string());
        if let Some(previous) = previous.filter(|p| p != object) {
            warn!(
                "selector '{}' maps to both '{}' and '{}'; keeping '{}'",
                selector, previous, object, object
            );
        }
    }

    /// Selector emitted for a style object.
    pub fn selector_for(&self, object: &str) -> Option<&str> {
        self.object_to_style.get(object).map(String::as_str)
    }

    /// Style object a selector was emitted for.
    pub fn object_for(&self, selector: &str) -> Option<&str> {
        self.style_to_object.get(selector).map(String::as_str)
    }
}

/// One compiled sheet or an ordered sequence of them, mirroring the
/// [`RecordSet`](crate::RecordSet) it was compiled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SheetSet {
    Many(Vec<CompiledSheet>),
    One(CompiledSheet),
}

impl SheetSet {
    /// Flattens the set into a list of sheets.
    pub fn into_vec(self) -> Vec<CompiledSheet> {
        match self {
            SheetSet::One(sheet) => vec![sheet],
            SheetSet::Many(sheets) => sheets,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SheetSet::One(_) => 1,
            SheetSet::Many(sheets) => sheets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
