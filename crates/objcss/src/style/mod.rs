//! Style object data model.
//!
//! This module provides the input side of the compiler:
//!
//! - [`StyleValue`]: A leaf value, an undefined value or a nested block
//! - [`Declaration`]: The sorted body of a style object or nested rule
//! - [`StyleModule`]: Named style objects
//! - [`RuleKind`]: How a declaration key is interpreted
//!
//! Declarations nest freely; the meaning of a nested block is decided by its
//! key (`:hover`, `& + &`, `@media ...`), see [`RuleKind::classify`].

mod kind;
mod value;

pub use kind::{RuleKind, LABEL_KEY};
pub use value::{Declaration, StyleModule, StyleValue};
