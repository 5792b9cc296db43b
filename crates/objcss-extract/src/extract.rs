//! Building a record from a source file's doc comments.

use log::debug;
use objcss::{ConfigRecord, StyleModule};
use regex::Regex;

use crate::comment::{doc_comments, DocComment, Unterminated};
use crate::error::{line_of, CommentBlock, ExtractError, Result};
use crate::settings::{ExtractSettings, Tags, PLACEHOLDER};

/// Builds a [`ConfigRecord`] for `module` from the doc comments in `source`.
///
/// The file-level block is the first doc comment carrying the config tag.
/// Its `@prepend` replaces `settings.prepend` and its `@map` turns map
/// comments on. Each object's own block is the doc comment directly above
/// its declaration, as located by the style pattern; objects without one
/// keep their derived selector.
///
/// # Example
///
/// ```rust
/// use objcss::{Declaration, StyleModule};
/// use objcss_extract::{extract, ExtractSettings};
///
/// let source = "
/// /** @class .btn */
/// export const button = { padding: 8 };
/// ";
/// let module = StyleModule::new().add("button", Declaration::new().set("padding", 8));
///
/// let record = extract(source, module, &ExtractSettings::new()).unwrap();
/// assert_eq!(record.override_for("button"), Some(".btn"));
/// ```
pub fn extract(
    source: &str,
    module: StyleModule,
    settings: &ExtractSettings,
) -> Result<ConfigRecord> {
    let pattern = settings.pattern();
    if !pattern.contains(PLACEHOLDER) {
        return Err(ExtractError::MissingPlaceholder {
            pattern: pattern.to_string(),
            placeholder: PLACEHOLDER,
        });
    }
    let tags = &settings.tags;

    let config = file_config(source, tags)?;
    let config_prepend = match &config {
        Some(config) => tag_value(config, &tags.prepend, &CommentBlock::Config)?,
        None => None,
    };
    let prepend = config_prepend.or(non_empty(settings.prepend.as_deref()));
    let map = config.as_ref().is_some_and(|c| c.has(&tags.map)) || settings.map;

    let names: Vec<String> = module.names().map(str::to_string).collect();
    let mut record = ConfigRecord::new(module).with_map(map);
    record.name = settings.name.clone();
    record.prepend = prepend.map(str::to_string);
    record.version = non_empty(settings.version.as_deref()).map(str::to_string);

    for name in &names {
        let Some(comment) = object_comment(source, pattern, name)? else {
            continue;
        };
        let block = CommentBlock::Object(name.clone());

        if comment.has(&tags.ignore) {
            debug!("'{}' is marked {}", name, tags.ignore);
            record = record.with_ignored(name);
            continue;
        }
        if let Some(selector) = tag_value(&comment, &tags.class, &block)? {
            debug!("'{}' overridden as '{}'", name, selector);
            record = record.with_override(name, selector);
        }
        if let Some(selector) = tag_value(&comment, &tags.combinator, &block)? {
            debug!("'{}' combines with '{}'", name, selector);
            record = record.with_combinator(name, selector);
        }
    }

    Ok(record)
}

fn file_config(source: &str, tags: &Tags) -> Result<Option<DocComment>> {
    let bodies = doc_comments(source).map_err(|Unterminated { offset }| {
        ExtractError::UnterminatedComment {
            block: CommentBlock::Config,
            line: line_of(source, offset),
        }
    })?;

    Ok(bodies
        .into_iter()
        .map(DocComment::parse)
        .find(|comment| comment.has(&tags.config)))
}

/// The doc comment attached to `name`'s declaration, if the declaration is
/// found and has one.
fn object_comment(source: &str, pattern: &str, name: &str) -> Result<Option<DocComment>> {
    let block = || CommentBlock::Object(name.to_string());
    let expanded = pattern.replace(PLACEHOLDER, &regex::escape(name));
    let re = Regex::new(&expanded).map_err(|source| ExtractError::InvalidPattern {
        block: block(),
        pattern: expanded.clone(),
        source,
    })?;

    let Some(found) = re.find(source) else {
        debug!("no declaration of '{}' found", name);
        return Ok(None);
    };

    let bodies = doc_comments(found.as_str()).map_err(|Unterminated { offset }| {
        ExtractError::UnterminatedComment {
            block: block(),
            line: line_of(source, found.start() + offset),
        }
    })?;

    Ok(bodies.first().map(|body| DocComment::parse(body)))
}

/// A value-taking tag's value: `None` when the tag is absent, an error when
/// it is present but empty.
fn tag_value<'a>(
    comment: &'a DocComment,
    tag: &str,
    block: &CommentBlock,
) -> Result<Option<&'a str>> {
    match comment.value(tag) {
        None => Ok(None),
        Some("") => Err(ExtractError::MissingTagValue {
            block: block.clone(),
            tag: tag.to_string(),
        }),
        Some(value) => Ok(Some(value)),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
