//! The style object compiler.
//!
//! Compilation walks a record's style objects in ascending name order. For
//! each object it:
//!
//! 1. Resolves the target, combinator and reported selectors
//! 2. Flattens the object into rules (own declarations, then nested rules)
//! 3. Emits the media queries found anywhere in the object
//! 4. Emits the keyframes blocks found anywhere in the object
//!
//! Top-level blocks are separated by one blank line. Rules without
//! declarations are never emitted.

mod at_rules;
mod rules;

use log::{debug, warn};

use crate::record::{ConfigRecord, RecordSet};
use crate::selector::{base_prefix, resolve};
use crate::sheet::{CompiledSheet, SheetSet};

use at_rules::{collect_keyframes, collect_media, render_keyframes, ObjectScope};
use rules::collect_rules;

/// Compiles one record into a stylesheet and its lookup maps.
///
/// # Example
///
/// ```rust
/// use objcss::{compile, ConfigRecord, Declaration, StyleModule};
///
/// let module = StyleModule::new().add(
///     "something",
///     Declaration::new()
///         .set("backgroundColor", "#fff")
///         .set("fontSize", 12)
///         .set("padding", 16),
/// );
///
/// let sheet = compile(&ConfigRecord::new(module));
/// assert_eq!(
///     sheet.css,
///     ".something {\n  background-color: #fff;\n  font-size: 12px;\n  padding: 16px;\n}"
/// );
/// assert_eq!(sheet.selector_for("something"), Some(".something"));
/// ```
pub fn compile(record: &ConfigRecord) -> CompiledSheet {
    for dangling in record.validate() {
        warn!("{}", dangling);
    }

    let base = base_prefix(record.prepend(), record.version());
    let mut sheet = CompiledSheet::new(record.name.clone());
    let mut blocks: Vec<String> = Vec::new();

    for (object, declaration) in record.module.iter() {
        if record.is_ignored(object) {
            debug!("skipping ignored style object '{}'", object);
            continue;
        }

        let resolved = resolve(record, object, &base);
        debug!(
            "compiling '{}' as '{}' (combinator: {:?})",
            object, resolved.target, resolved.combinator
        );
        sheet.record_selector(object, &resolved.reported);

        let scope = ObjectScope {
            selector: &resolved.target,
            combinator: resolved.combinator.as_deref(),
            label: record.map.then_some(object.as_str()),
        };

        blocks.extend(
            collect_rules(declaration, scope.selector, scope.combinator)
                .iter()
                .filter_map(|rule| rule.render("", scope.label)),
        );
        blocks.extend(
            collect_media(declaration)
                .iter()
                .filter_map(|media| scope.render_media(media, 0)),
        );
        blocks.extend(
            collect_keyframes(declaration)
                .iter()
                .filter_map(render_keyframes),
        );
    }

    sheet.css = blocks.join("\n\n").trim().to_string();
    sheet
}

/// Compiles a sequence of records, returning one sheet per record in the
/// same order. Records are compiled independently.
pub fn compile_all(records: &[ConfigRecord]) -> Vec<CompiledSheet> {
    records.iter().map(compile).collect()
}

/// Compiles a [`RecordSet`], preserving its shape: a single record yields a
/// single sheet and a sequence yields a sequence of equal length.
pub fn compile_set(records: &RecordSet) -> SheetSet {
    match records {
        RecordSet::One(record) => SheetSet::One(compile(record)),
        RecordSet::Many(records) => SheetSet::Many(compile_all(records)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Declaration, StyleModule};

    fn something() -> Declaration {
        Declaration::new()
            .set("backgroundColor", "#fff")
            .set("fontSize", 12)
            .set("padding", 16)
    }

    #[test]
    fn test_compile_basic() {
        let record =
            ConfigRecord::new(StyleModule::new().add("something", something())).with_name("a.css");
        let sheet = compile(&record);

        assert_eq!(sheet.name.as_deref(), Some("a.css"));
        assert_eq!(
            sheet.css,
            ".something {\n  background-color: #fff;\n  font-size: 12px;\n  padding: 16px;\n}"
        );
    }

    #[test]
    fn test_compile_empty_module() {
        let sheet = compile(&ConfigRecord::new(StyleModule::new()));
        assert_eq!(sheet.css, "");
        assert!(sheet.object_to_style.is_empty());
    }

    #[test]
    fn test_object_without_declarations_emits_no_empty_rule() {
        let module = StyleModule::new().add(
            "list",
            Declaration::new().set("& + &", Declaration::new().set("marginTop", 4)),
        );
        let sheet = compile(&ConfigRecord::new(module).with_map(true));
        assert_eq!(sheet.css, "/* list */\n.list + .list {\n  margin-top: 4px;\n}");
    }

    #[test]
    fn test_blocks_from_consecutive_objects_are_separated() {
        let module = StyleModule::new()
            .add(
                "a",
                Declaration::new()
                    .set("color", "red")
                    .set("@media print", Declaration::new().set("color", "black")),
            )
            .add("b", Declaration::new().set("color", "blue"));
        let sheet = compile(&ConfigRecord::new(module));

        assert_eq!(
            sheet.css,
            ".a {\n  color: red;\n}\n\n@media print {\n  .a {\n    color: black;\n  }\n}\n\n.b {\n  color: blue;\n}"
        );
    }

    #[test]
    fn test_compile_set_keeps_shape() {
        let record = ConfigRecord::new(StyleModule::new().add("something", something()));

        let one = compile_set(&RecordSet::One(record.clone()));
        assert!(matches!(one, SheetSet::One(_)));

        let many = compile_set(&RecordSet::Many(vec![record.clone(), record]));
        assert!(matches!(&many, SheetSet::Many(sheets) if sheets.len() == 2));
    }
}
