//! Configuration records: a style module plus the settings used to compile it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::style::StyleModule;

/// Everything needed to compile one stylesheet.
///
/// All settings are optional; a record with only a module compiles every
/// style object to a class named after it. Settings that reference names
/// missing from the module are inert (see [`ConfigRecord::validate`]).
///
/// # Example
///
/// ```rust
/// use objcss::{ConfigRecord, Declaration, StyleModule};
///
/// let module = StyleModule::new()
///     .add("card", Declaration::new().set("padding", 16))
///     .add("title", Declaration::new().set("fontSize", 20));
///
/// let record = ConfigRecord::new(module)
///     .with_name("index.css")
///     .with_prepend(".app")
///     .with_version("1.2.0")
///     .with_override("title", "h1");
///
/// assert!(record.validate().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRecord")]
pub struct ConfigRecord {
    /// Output name, passed through to the compiled sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Selector prefix for derived class names (e.g. `.app`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepend: Option<String>,
    /// Literal selectors replacing the derived selector, by object name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, String>,
    /// Selectors substituted for `&`, by object name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub combinators: BTreeMap<String, String>,
    /// Object names left out of the output.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,
    /// Version tag folded into the prefix (`1.2.3` becomes `v1-2-3`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Annotate every rule with a `/* name */` comment.
    pub map: bool,
    pub module: StyleModule,
}

impl ConfigRecord {
    /// Creates a record for a module with every setting absent.
    pub fn new(module: StyleModule) -> Self {
        Self {
            name: None,
            prepend: None,
            overrides: BTreeMap::new(),
            combinators: BTreeMap::new(),
            ignore: Vec::new(),
            version: None,
            map: false,
            module,
        }
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

    /// Replaces the derived selector of `object` with `selector`.
    pub fn with_override(mut self, object: &str, selector: impl Into<String>) -> Self {
        self.overrides.insert(object.to_string(), selector.into());
        self
    }

    /// Sets the selector substituted for `&` inside `object`.
    pub fn with_combinator(mut self, object: &str, selector: impl Into<String>) -> Self {
        self.combinators.insert(object.to_string(), selector.into());
        self
    }

    /// Leaves `object` out of the compiled output.
    pub fn with_ignored(mut self, object: &str) -> Self {
        if !self.is_ignored(object) {
            self.ignore.push(object.to_string());
        }
        self
    }

    /// The prepend setting, treating an empty string as absent.
    pub fn prepend(&self) -> Option<&str> {
        non_empty(self.prepend.as_deref())
    }

    /// The version setting, treating an empty string as absent.
    pub fn version(&self) -> Option<&str> {
        non_empty(self.version.as_deref())
    }

    /// The override selector for `object`, if any.
    pub fn override_for(&self, object: &str) -> Option<&str> {
        non_empty(self.overrides.get(object).map(String::as_str))
    }

    /// The combinator selector for `object`, if any.
    pub fn combinator_for(&self, object: &str) -> Option<&str> {
        non_empty(self.combinators.get(object).map(String::as_str))
    }

    pub fn is_ignored(&self, object: &str) -> bool {
        self.ignore.iter().any(|name| name == object)
    }

    /// Lists settings that reference names missing from the module.
    ///
    /// Such settings are ignored by the compiler; this only reports them.
    pub fn validate(&self) -> Vec<DanglingName> {
        let overrides = self
            .overrides
            .keys()
            .map(|name| (Setting::Override, name));
        let combinators = self
            .combinators
            .keys()
            .map(|name| (Setting::Combinator, name));
        let ignore = self.ignore.iter().map(|name| (Setting::Ignore, name));

        overrides
            .chain(combinators)
            .chain(ignore)
            .filter(|(_, name)| !self.module.has(name))
            .map(|(setting, name)| DanglingName {
                setting,
                name: name.clone(),
            })
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// The per-object setting a [`DanglingName`] was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Override,
    Combinator,
    Ignore,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Setting::Override => "overrides",
            Setting::Combinator => "combinators",
            Setting::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

/// A setting entry naming a style object the module does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingName {
    pub setting: Setting,
    pub name: String,
}

impl fmt::Display for DanglingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' in {} is not a style object in the module",
            self.name, self.setting
        )
    }
}

/// Wire form of a record, where every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawRecord {
    name: Option<String>,
    prepend: Option<String>,
    overrides: BTreeMap<String, String>,
    combinators: BTreeMap<String, String>,
    ignore: Vec<String>,
    version: Option<String>,
    map: Option<bool>,
    module: Option<StyleModule>,
}

impl RawRecord {
    fn into_record(self, index: Option<usize>) -> Result<ConfigRecord, RecordError> {
        let Some(module) = self.module else {
            return Err(RecordError::missing_module(self.name.as_deref(), index));
        };

        Ok(ConfigRecord {
            name: self.name,
            prepend: self.prepend,
            overrides: self.overrides,
            combinators: self.combinators,
            ignore: self.ignore,
            version: self.version,
            map: self.map.unwrap_or(false),
            module,
        })
    }
}

impl TryFrom<RawRecord> for ConfigRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        raw.into_record(None)
    }
}

/// One record or an ordered sequence of records.
///
/// Compiling a [`RecordSet`] yields a [`SheetSet`](crate::SheetSet) of the
/// same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordSet {
    Many(Vec<ConfigRecord>),
    One(ConfigRecord),
}

impl RecordSet {
    /// Parses a JSON document holding a record or an array of records.
    pub fn from_json_str(text: &str) -> Result<Self, RecordError> {
        match serde_json::from_str::<serde_json::Value>(text)? {
            serde_json::Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    serde_json::from_value::<RawRecord>(item)?.into_record(Some(index))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(RecordSet::Many),
            other => {
                let record = serde_json::from_value::<RawRecord>(other)?.into_record(None)?;
                Ok(RecordSet::One(record))
            }
        }
    }

    /// Parses a YAML document holding a record or a sequence of records.
    pub fn from_yaml_str(text: &str) -> Result<Self, RecordError> {
        match serde_yaml::from_str::<serde_yaml::Value>(text)? {
            serde_yaml::Value::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    serde_yaml::from_value::<RawRecord>(item)?.into_record(Some(index))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(RecordSet::Many),
            other => {
                let record = serde_yaml::from_value::<RawRecord>(other)?.into_record(None)?;
                Ok(RecordSet::One(record))
            }
        }
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        match self {
            RecordSet::One(_) => 1,
            RecordSet::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<ConfigRecord> for RecordSet {
    fn from(record: ConfigRecord) -> Self {
        RecordSet::One(record)
    }
}

impl From<Vec<ConfigRecord>> for RecordSet {
    fn from(records: Vec<ConfigRecord>) -> Self {
        RecordSet::Many(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Declaration;

    fn module() -> StyleModule {
        StyleModule::new().add("something", Declaration::new().set("padding", 16))
    }

    #[test]
    fn test_new_record_defaults() {
        let record = ConfigRecord::new(module());
        assert_eq!(record.name, None);
        assert_eq!(record.prepend(), None);
        assert_eq!(record.version(), None);
        assert!(!record.map);
        assert!(record.overrides.is_empty());
        assert!(record.ignore.is_empty());
    }

    #[test]
    fn test_empty_settings_are_absent() {
        let record = ConfigRecord::new(module())
            .with_prepend("")
            .with_version("")
            .with_override("something", "")
            .with_combinator("something", "");

        assert_eq!(record.prepend(), None);
        assert_eq!(record.version(), None);
        assert_eq!(record.override_for("something"), None);
        assert_eq!(record.combinator_for("something"), None);
    }

    #[test]
    fn test_with_ignored_deduplicates() {
        let record = ConfigRecord::new(module())
            .with_ignored("something")
            .with_ignored("something");
        assert_eq!(record.ignore, vec!["something".to_string()]);
    }

    #[test]
    fn test_validate_reports_dangling_names() {
        let record = ConfigRecord::new(module())
            .with_override("something", "p")
            .with_override("ghost", ".ghost")
            .with_combinator("phantom", ".x")
            .with_ignored("nobody");

        let dangling = record.validate();
        assert_eq!(
            dangling,
            vec![
                DanglingName {
                    setting: Setting::Override,
                    name: "ghost".into()
                },
                DanglingName {
                    setting: Setting::Combinator,
                    name: "phantom".into()
                },
                DanglingName {
                    setting: Setting::Ignore,
                    name: "nobody".into()
                },
            ]
        );
        assert_eq!(
            dangling[0].to_string(),
            "'ghost' in overrides is not a style object in the module"
        );
    }

    #[test]
    fn test_json_single_record() {
        let set = RecordSet::from_json_str(
            r##"{ "name": "index.css", "map": true, "module": { "something": { "padding": 16 } } }"##,
        )
        .unwrap();

        match set {
            RecordSet::One(record) => {
                assert_eq!(record.name.as_deref(), Some("index.css"));
                assert!(record.map);
                assert!(record.module.has("something"));
            }
            RecordSet::Many(_) => panic!("Expected a single record"),
        }
    }

    #[test]
    fn test_json_record_array() {
        let set = RecordSet::from_json_str(
            r#"[{ "module": {} }, { "name": "b.css", "prepend": ".b", "module": {} }]"#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_json_missing_module_fails() {
        let err = RecordSet::from_json_str(r#"{ "name": "index.css" }"#).unwrap_err();
        assert!(matches!(err, RecordError::MissingModule { .. }));
        assert_eq!(err.to_string(), "missing module in record 'index.css'");
    }

    #[test]
    fn test_json_missing_module_in_array_names_position() {
        let err = RecordSet::from_json_str(r#"[{ "module": {} }, { "prepend": ".x" }]"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "missing module in record #1");
    }

    #[test]
    fn test_serde_deserialize_rejects_missing_module() {
        let result = serde_json::from_str::<ConfigRecord>(r#"{ "name": "a.css" }"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing module"));
    }

    #[test]
    fn test_yaml_record() {
        let yaml = r##"
name: index.css
version: "1.2.3"
overrides:
  something: p
ignore: [other]
module:
  something:
    backgroundColor: "#fff"
    fontSize: 12
"##;
        let set = RecordSet::from_yaml_str(yaml).unwrap();
        let RecordSet::One(record) = set else {
            panic!("Expected a single record");
        };
        assert_eq!(record.version(), Some("1.2.3"));
        assert_eq!(record.override_for("something"), Some("p"));
        assert!(record.is_ignored("other"));
    }

    #[test]
    fn test_yaml_sequence_missing_module() {
        let err = RecordSet::from_yaml_str("- module: {}\n- name: broken.css\n").unwrap_err();
        assert_eq!(err.to_string(), "missing module in record 'broken.css'");
    }

    #[test]
    fn test_record_serializes_camel_case_and_skips_absent() {
        let record = ConfigRecord::new(module())
            .with_name("index.css")
            .with_combinator("something", ".x");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["name"], "index.css");
        assert_eq!(value["combinators"]["something"], ".x");
        assert!(value.get("prepend").is_none());
        assert!(value.get("overrides").is_none());
        assert_eq!(value["map"], false);
    }
}
