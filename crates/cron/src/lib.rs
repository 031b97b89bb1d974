//! Five-field cron expression grammar: validation and plain-English description.
//!
//! The crate is pure: no I/O, no shared mutable state. Every entry point is a
//! total function of its input string plus the static field table in
//! [`field`].
//!
//! - [`field`]: Per-position numeric domains (minute … weekday)
//! - [`keyword`]: The eight `@` special keywords
//! - [`term`]: Classification and checking of a single field term
//! - [`expression`]: Whole-expression validation
//! - [`describe`]: Human-readable rendering

pub mod describe;
pub mod error;
pub mod expression;
pub mod field;
pub mod keyword;
pub mod term;

pub use describe::describe;
pub use error::{ErrorKind, RangeBound, TermError, ValidationError};
pub use expression::{parse, validate, CronExpression};
pub use field::{FieldDomain, FIELDS, FIELD_COUNT};
pub use keyword::Keyword;
pub use term::{ListItem, Span, Term};
