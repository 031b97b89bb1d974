//! Structural validation of lessons. The first issue found is reported.

use std::collections::HashSet;

use ck_cron::ValidationError;

use crate::types::{Koan, Lesson, BLANK};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KoanIssue {
    #[error("koan must have {0}")]
    MissingField(&'static str),

    #[error("incomplete expression must contain __ placeholder")]
    MissingBlank,

    #[error("answer '{answer}' does not create a valid cron expression: {expression}: {source}")]
    InvalidAnswer {
        answer: String,
        expression: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LessonIssue {
    #[error("lesson must have a title")]
    MissingTitle,

    #[error("lesson must have at least one koan")]
    NoKoans,

    /// `index` is 1-based.
    #[error("koan {index}: {source}")]
    Koan {
        index: usize,
        #[source]
        source: KoanIssue,
    },

    #[error("duplicate koan ID: {0}")]
    DuplicateId(String),
}

pub fn validate_lesson(lesson: &Lesson) -> Result<(), LessonIssue> {
    if lesson.title.is_empty() {
        return Err(LessonIssue::MissingTitle);
    }
    if lesson.koans.is_empty() {
        return Err(LessonIssue::NoKoans);
    }

    let mut seen = HashSet::new();
    for (i, koan) in lesson.koans.iter().enumerate() {
        validate_koan(koan).map_err(|source| LessonIssue::Koan {
            index: i + 1,
            source,
        })?;
        if !seen.insert(koan.id.as_str()) {
            return Err(LessonIssue::DuplicateId(koan.id.clone()));
        }
    }
    Ok(())
}

pub fn validate_koan(koan: &Koan) -> Result<(), KoanIssue> {
    let required = [
        (&koan.id, "an ID"),
        (&koan.description, "a description"),
        (&koan.question, "a question"),
        (&koan.incomplete, "an incomplete expression"),
        (&koan.answer, "an answer"),
    ];
    if let Some((_, what)) = required.iter().find(|(value, _)| value.is_empty()) {
        return Err(KoanIssue::MissingField(*what));
    }

    if !koan.incomplete.contains(BLANK) {
        return Err(KoanIssue::MissingBlank);
    }

    let expression = koan.complete_expression();
    ck_cron::validate(&expression).map_err(|source| KoanIssue::InvalidAnswer {
        answer: koan.answer.clone(),
        expression,
        source,
    })
}
