//! Flattening declarations into plain rules and rendering them.

use crate::property::declaration_lines;
use crate::style::{Declaration, RuleKind};

/// One selector with its declaration lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rule {
    pub selector: String,
    pub declarations: Vec<String>,
}

impl Rule {
    /// Renders the rule at `indent`, or `None` when it has no declarations.
    ///
    /// With a `label`, the rule is preceded by a `/* label */` line.
    pub fn render(&self, indent: &str, label: Option<&str>) -> Option<String> {
        if self.declarations.is_empty() {
            return None;
        }

        let mut out = String::new();
        if let Some(label) = label {
            out.push_str(&format!("{}/* {} */\n", indent, label));
        }
        out.push_str(&format!("{}{} {{\n", indent, self.selector));
        for line in &self.declarations {
            out.push_str(&format!("{}  {};\n", indent, line));
        }
        out.push_str(indent);
        out.push('}');
        Some(out)
    }
}

/// Flattens `declaration` into rules, the current level first and then each
/// nested rule in ascending key order.
///
/// `combinator` replaces `&` in this level's keys; deeper levels substitute
/// their parent selector. At-rules and `label` are left to the caller.
pub(crate) fn collect_rules(
    declaration: &Declaration,
    selector: &str,
    combinator: Option<&str>,
) -> Vec<Rule> {
    let mut rules = Vec::new();
    push_rules(declaration, selector, combinator, &mut rules);
    rules
}

fn push_rules(
    declaration: &Declaration,
    selector: &str,
    combinator: Option<&str>,
    rules: &mut Vec<Rule>,
) {
    rules.push(Rule {
        selector: selector.trim().to_string(),
        declarations: declaration_lines(declaration),
    });

    for (key, value) in declaration {
        let Some(nested) = value.as_block() else {
            continue;
        };

        let nested_selector = match RuleKind::classify(key, value) {
            RuleKind::Pseudo => format!("{}{}", selector, key),
            RuleKind::Combinator => key.replace('&', combinator.unwrap_or(selector)),
            RuleKind::Attribute | RuleKind::Descendant => format!("{} {}", selector, key),
            RuleKind::MediaQuery
            | RuleKind::Keyframes
            | RuleKind::Reserved
            | RuleKind::Declaration => continue,
        };

        push_rules(nested, &nested_selector, None, rules);
    }
}

/// Renders rules at `indent`, skipping empty ones, separated by `separator`.
pub(crate) fn render_rules(
    rules: &[Rule],
    indent: &str,
    label: Option<&str>,
    separator: &str,
) -> Option<String> {
    let rendered: Vec<String> = rules
        .iter()
        .filter_map(|rule| rule.render(indent, label))
        .collect();

    (!rendered.is_empty()).then(|| rendered.join(separator))
}
