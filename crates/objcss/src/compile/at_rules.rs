//! Media query and keyframes extraction.
//!
//! At-rules may appear at any depth of a style object. They are lifted out
//! of the rule tree and emitted after the object's main rules: media queries
//! keep their own nesting, keyframes always become top-level blocks.

use crate::style::{Declaration, RuleKind};

use super::rules::{collect_rules, render_rules};

const INDENT: &str = "  ";

/// A media query found in a style object, with the media queries nested in
/// its body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MediaQuery<'a> {
    pub query: &'a str,
    pub body: &'a Declaration,
    pub children: Vec<MediaQuery<'a>>,
}

/// Collects media queries in ascending key order at every level.
///
/// Media queries inside ordinary nested rules are hoisted to the level of
/// the closest enclosing media query (or the top level).
pub(crate) fn collect_media(declaration: &Declaration) -> Vec<MediaQuery<'_>> {
    let mut found = Vec::new();

    for (key, value) in declaration {
        let Some(body) = value.as_block() else {
            continue;
        };
        match RuleKind::classify(key, value) {
            RuleKind::MediaQuery => found.push(MediaQuery {
                query: key,
                body,
                children: collect_media(body),
            }),
            RuleKind::Reserved => {}
            _ => found.extend(collect_media(body)),
        }
    }

    found
}

/// A keyframes block found in a style object.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Keyframes<'a> {
    pub name: &'a str,
    pub frames: &'a Declaration,
}

/// Collects keyframes blocks in ascending key order, at any depth.
pub(crate) fn collect_keyframes(declaration: &Declaration) -> Vec<Keyframes<'_>> {
    let mut found = Vec::new();

    for (key, value) in declaration {
        let Some(frames) = value.as_block() else {
            continue;
        };
        match RuleKind::classify(key, value) {
            RuleKind::Keyframes => found.push(Keyframes { name: key, frames }),
            RuleKind::Reserved => {}
            _ => found.extend(collect_keyframes(frames)),
        }
    }

    found
}

/// Selector context shared by every rule of one style object.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObjectScope<'a> {
    pub selector: &'a str,
    pub combinator: Option<&'a str>,
    pub label: Option<&'a str>,
}

impl ObjectScope<'_> {
    /// Renders a media query block at nesting `depth`.
    ///
    /// Rules inside the block are separated by blank lines; nested media
    /// queries follow on the next line. Returns `None` when nothing inside
    /// the block produced output.
    pub fn render_media(&self, media: &MediaQuery<'_>, depth: usize) -> Option<String> {
        let indent = INDENT.repeat(depth);
        let inner = INDENT.repeat(depth + 1);

        let rules = collect_rules(media.body, self.selector, self.combinator);
        let body = render_rules(&rules, &inner, self.label, "\n\n");

        let nested: Vec<String> = media
            .children
            .iter()
            .filter_map(|child| self.render_media(child, depth + 1))
            .collect();
        let nested = (!nested.is_empty()).then(|| nested.join("\n\n"));

        let content = match (body, nested) {
            (Some(body), Some(nested)) => format!("{}\n{}", body, nested),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => return None,
        };

        Some(format!("{}{} {{\n{}\n{}}}", indent, media.query, content, indent))
    }
}

/// Renders a keyframes block; each offset is a rule indented one level with
/// no blank lines in between. Returns `None` when every offset is empty.
pub(crate) fn render_keyframes(keyframes: &Keyframes<'_>) -> Option<String> {
    let frames: Vec<String> = keyframes
        .frames
        .iter()
        .filter_map(|(offset, value)| value.as_block().map(|body| (offset, body)))
        .filter_map(|(offset, body)| {
            render_rules(&collect_rules(body, offset, None), INDENT, None, "\n")
        })
        .collect();

    if frames.is_empty() {
        return None;
    }

    Some(format!("{} {{\n{}\n}}", keyframes.name, frames.join("\n")))
}
