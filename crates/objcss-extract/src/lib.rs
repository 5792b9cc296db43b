//! # objcss-extract - record settings from doc comments
//!
//! Style objects are usually authored as `export const` declarations in a
//! source file. This crate reads the doc comments around those declarations
//! and turns them into an [`objcss::ConfigRecord`], so naming settings can
//! live next to the styles they affect:
//!
//! ```text
//! /**
//!  * @config
//!  * @prepend .app
//!  */
//!
//! /** @class .btn */
//! export const button = { ... };
//!
//! /** @ignore */
//! export const draft = { ... };
//!
//! /** @combinator .item */
//! export const list = { '& + &': { ... } };
//! ```
//!
//! | Tag | Where | Effect |
//! |-----|-------|--------|
//! | `@config` | file | marks the file-level block |
//! | `@prepend v` | file | selector prefix, wins over the caller's |
//! | `@map` | file | map comments on |
//! | `@class v` | object | selector override |
//! | `@combinator v` | object | combinator value |
//! | `@ignore` | object | object left out |
//!
//! Tags can be renamed through [`Tags`], and the way declarations are
//! located through [`ExtractSettings::style_pattern`].

mod comment;
mod error;
mod extract;
mod settings;

pub use comment::DocComment;
pub use error::{CommentBlock, ExtractError, Result};
pub use extract::extract;
pub use settings::{ExtractSettings, Tags, DEFAULT_STYLE_PATTERN, PLACEHOLDER};
