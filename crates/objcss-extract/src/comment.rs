//! Doc comment scanning and tag parsing.
//!
//! A doc comment is a `/** ... */` block. Its body is read line by line with
//! the leading `*` margin removed, then split into tags: a word starting
//! with `@` opens a tag, and the words up to the next tag form its value.

/// Byte offset of a `/**` that is never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unterminated {
    pub offset: usize,
}

/// Returns the bodies of every doc comment in `source`, in order.
///
/// `/**/` is an empty regular comment and is skipped.
pub(crate) fn doc_comments(source: &str) -> Result<Vec<&str>, Unterminated> {
    let mut bodies = Vec::new();
    let mut pos = 0;

    while let Some(found) = source[pos..].find("/**") {
        let open = pos + found;
        let start = open + 3;
        if source[start..].starts_with('/') {
            pos = start + 1;
            continue;
        }
        match source[start..].find("*/") {
            Some(len) => {
                bodies.push(&source[start..start + len]);
                pos = start + len + 2;
            }
            None => return Err(Unterminated { offset: open }),
        }
    }

    Ok(bodies)
}

/// The tags of one doc comment, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    tags: Vec<(String, String)>,
}

impl DocComment {
    /// Parses a comment body (the text between `/**` and `*/`).
    ///
    /// Text before the first tag is description and is dropped. Values are
    /// whitespace-normalized.
    pub fn parse(body: &str) -> Self {
        let mut tags: Vec<(String, String)> = Vec::new();

        for word in body
            .lines()
            .flat_map(|line| strip_margin(line).split_whitespace())
        {
            if is_tag(word) {
                tags.push((word.to_string(), String::new()));
            } else if let Some((_, value)) = tags.last_mut() {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(word);
            }
        }

        Self { tags }
    }

    /// True when the comment carries `tag`.
    pub fn has(&self, tag: &str) -> bool {
        self.tags.iter().any(|(name, _)| same_tag(name, tag))
    }

    /// The value of the first occurrence of `tag`; empty when the tag is
    /// present without a value.
    pub fn value(&self, tag: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(name, _)| same_tag(name, tag))
            .map(|(_, value)| value.as_str())
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn strip_margin(line: &str) -> &str {
    let line = line.trim_start();
    line.strip_prefix('*').unwrap_or(line)
}

fn is_tag(word: &str) -> bool {
    match word.strip_prefix('@') {
        Some(name) => {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        None => false,
    }
}

fn same_tag(a: &str, b: &str) -> bool {
    a.trim_start_matches('@') == b.trim_start_matches('@')
}
