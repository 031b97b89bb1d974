//! Lessons and koans: the YAML-defined exercises of cronkoans.
//!
//! A lesson file holds a title and a list of koans. Each koan shows an
//! incomplete cron expression with a `__` blank; the learner supplies the
//! missing piece. Lessons are validated at load time so that every answer,
//! substituted into its blank, yields a syntactically valid expression.

pub mod catalog;
pub mod loader;
pub mod types;
pub mod validate;

pub use catalog::{Catalog, KoanCheck};
pub use loader::{lesson_files, load_all_lessons, load_lesson};
pub use types::{Koan, Lesson, BLANK};
pub use validate::{validate_koan, validate_lesson, KoanIssue, LessonIssue};
