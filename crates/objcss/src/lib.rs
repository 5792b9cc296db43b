//! # objcss - style objects to stylesheets
//!
//! `objcss` compiles nested style objects (plain data, usually authored in
//! JSON, YAML or built in code) into stylesheet text, along with lookup maps
//! between style object names and the selectors they were emitted under.
//!
//! ## Core concepts
//!
//! - [`StyleModule`]: Named style objects, each a [`Declaration`]
//! - [`ConfigRecord`]: A module plus naming settings (prepend, version,
//!   overrides, combinators, ignore list, map comments)
//! - [`compile`]: Turns a record into a [`CompiledSheet`]
//! - [`RecordSet`] / [`SheetSet`]: One record or many, compiled shape-for-shape
//!
//! ## Quick start
//!
//! ```rust
//! use objcss::{compile, ConfigRecord, Declaration, StyleModule};
//!
//! let module = StyleModule::new()
//!     .add("card", Declaration::new()
//!         .set("padding", 16)
//!         .set(":hover", Declaration::new().set("boxShadow", "0 1px 2px #000"))
//!         .set("@media (max-width: 699px)", Declaration::new().set("padding", 8)));
//!
//! let sheet = compile(&ConfigRecord::new(module).with_prepend(".app"));
//!
//! assert_eq!(sheet.selector_for("card"), Some(".app-card"));
//! assert!(sheet.css.starts_with(".app-card {\n  padding: 16px;\n}"));
//! assert!(sheet.css.contains(".app-card:hover {"));
//! assert!(sheet.css.contains("@media (max-width: 699px) {\n  .app-card {"));
//! ```
//!
//! ## Selector rules
//!
//! Nested keys are interpreted by [`RuleKind::classify`]:
//!
//! | Key | Emitted selector |
//! |-----|------------------|
//! | `:hover` | `{parent}:hover` |
//! | `& + &` | `&` replaced by the combinator (or parent) |
//! | `[open]` | `{parent} [open]` |
//! | `button` | `{parent} button` |
//! | `@media ...` | wrapping block after the main rules |
//! | `@keyframes ...` | standalone block after everything else |
//!
//! The compiler is a pure function: it performs no I/O and keeps no state
//! between calls.

pub mod compile;
mod error;
pub mod property;
mod record;
pub mod selector;
mod sheet;
pub mod style;

pub use compile::{compile, compile_all, compile_set};
pub use error::RecordError;
pub use record::{ConfigRecord, DanglingName, RecordSet, Setting};
pub use selector::{base_prefix, kebab_case};
pub use sheet::{CompiledSheet, SheetSet};
pub use style::{Declaration, RuleKind, StyleModule, StyleValue};
