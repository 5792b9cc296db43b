//! Property serialization: names, units and declaration lines.

use crate::selector::kebab_case;
use crate::style::{Declaration, RuleKind, StyleValue};

/// Properties whose numeric values never receive a unit.
///
/// Matched against the key as written in the style object. Unitless
/// properties are listed here rather than detected.
pub const UNITLESS_PROPERTIES: &[&str] = &[
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "opacity",
    "order",
    "zIndex",
    "zoom",
];

/// Unit appended to numeric values.
pub const DEFAULT_UNIT: &str = "px";

/// Converts a style object key to a CSS property name.
///
/// Keys that already contain a dash (including `--custom` properties) are
/// kept as written. Others are kebab-cased, with a leading `webkit-` turned
/// into the `-webkit-` vendor prefix.
pub fn property_name(key: &str) -> String {
    if key.contains('-') {
        return key.to_string();
    }

    let name = kebab_case(key);
    match name.strip_prefix("webkit-") {
        Some(rest) => format!("-webkit-{}", rest),
        None => name,
    }
}

/// Formats a leaf value for `key`, or `None` when nothing should be emitted.
pub fn property_value(key: &str, value: &StyleValue) -> Option<String> {
    match value {
        StyleValue::Text(text) => Some(text.clone()),
        StyleValue::Number(n) => {
            let mut out = format_number(*n);
            if *n != 0.0 && !UNITLESS_PROPERTIES.contains(&key) {
                out.push_str(DEFAULT_UNIT);
            }
            Some(out)
        }
        StyleValue::Undefined | StyleValue::Block(_) => None,
    }
}

/// Prints a number in its shortest form, without a trailing `.0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Serializes the leaf entries of one declaration level as `name: value`
/// pairs, in ascending key order.
pub fn declaration_lines(declaration: &Declaration) -> Vec<String> {
    declaration
        .iter()
        .filter(|(key, value)| RuleKind::classify(key, value) == RuleKind::Declaration)
        .filter_map(|(key, value)| {
            property_value(key, value).map(|v| format!("{}: {}", property_name(key), v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_name_kebab() {
        assert_eq!(property_name("backgroundColor"), "background-color");
        assert_eq!(property_name("padding"), "padding");
    }

    #[test]
    fn test_property_name_verbatim_with_dash() {
        assert_eq!(
            property_name("--button-hover-text-color"),
            "--button-hover-text-color"
        );
        assert_eq!(property_name("-moz-appearance"), "-moz-appearance");
        assert_eq!(property_name("grid-area"), "grid-area");
    }

    #[test]
    fn test_property_name_webkit_prefix() {
        assert_eq!(property_name("WebkitTransition"), "-webkit-transition");
        assert_eq!(property_name("webkitBoxShadow"), "-webkit-box-shadow");
    }

    #[test]
    fn test_numbers_get_px() {
        assert_eq!(
            property_value("fontSize", &StyleValue::Number(12.0)).as_deref(),
            Some("12px")
        );
        assert_eq!(
            property_value("margin", &StyleValue::Number(-4.5)).as_deref(),
            Some("-4.5px")
        );
    }

    #[test]
    fn test_zero_has_no_unit() {
        assert_eq!(
            property_value("marginLeft", &StyleValue::Number(0.0)).as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_unitless_properties() {
        assert_eq!(
            property_value("zIndex", &StyleValue::Number(1000.0)).as_deref(),
            Some("1000")
        );
        assert_eq!(
            property_value("zoom", &StyleValue::Number(1.0)).as_deref(),
            Some("1")
        );
        assert_eq!(
            property_value("flexGrow", &StyleValue::Number(1.0)).as_deref(),
            Some("1")
        );
        // only the key as written is checked
        assert_eq!(
            property_value("z-index", &StyleValue::Number(3.0)).as_deref(),
            Some("3px")
        );
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(
            property_value("content", &StyleValue::from("\"\"")).as_deref(),
            Some("\"\"")
        );
    }

    #[test]
    fn test_undefined_is_dropped() {
        assert_eq!(property_value("fontSize", &StyleValue::Undefined), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_declaration_lines_skip_nested_and_label() {
        let decl = Declaration::new()
            .set("label", "card")
            .set("padding", 16)
            .set("backgroundColor", "#fff")
            .set("fontSize", None::<i32>)
            .set(":hover", Declaration::new().set("color", "red"));

        assert_eq!(
            declaration_lines(&decl),
            vec!["background-color: #fff", "padding: 16px"]
        );
    }
}
