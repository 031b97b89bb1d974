//! Single-field term classification and checking.
//!
//! A raw field is first classified into a [`Shape`] purely by its syntax, in a
//! fixed precedence order. Each shape is then checked against the field's
//! [`FieldDomain`] by exactly one code path, yielding a typed [`Term`].
//!
//! | Precedence | Shape            | Syntax               |
//! |------------|------------------|----------------------|
//! | 1          | wildcard         | `*`                  |
//! | 2          | stepped wildcard | `*/n`                |
//! | 3          | stepped range    | contains `/` and `-` |
//! | 4          | list             | contains `,`         |
//! | 5          | range            | contains `-`         |
//! | 6          | single           | anything else        |
//!
//! List elements may only be ranges or single values, so `1,2/3` is a list
//! whose second element fails as a single value.

use crate::error::{RangeBound, TermError};
use crate::field::FieldDomain;

/// Inclusive `start-end` range, already checked against its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Range(Span),
    Single(i64),
}

/// A validated field term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Wildcard,
    SteppedWildcard { step: i64 },
    Range(Span),
    /// The step is not compared against the width of the range.
    SteppedRange { span: Span, step: i64 },
    List(Vec<ListItem>),
    Single(i64),
}

/// Syntactic shape of a raw field, before any numeric checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    Wildcard,
    SteppedWildcard { step: &'a str },
    SteppedRange { range: &'a str, step: &'a str },
    List(&'a str),
    Range(&'a str),
    Single(&'a str),
}

impl<'a> Shape<'a> {
    /// Classify a raw field. Only a stepped range with more than one `/` can
    /// fail at this stage.
    pub fn classify(text: &'a str) -> Result<Shape<'a>, TermError> {
        if text == "*" {
            return Ok(Shape::Wildcard);
        }
        if let Some(step) = text.strip_prefix("*/") {
            return Ok(Shape::SteppedWildcard { step });
        }
        if text.contains('/') && text.contains('-') {
            let parts: Vec<&str> = text.split('/').collect();
            return match parts.as_slice() {
                [range, step] => Ok(Shape::SteppedRange {
                    range: *range,
                    step: *step,
                }),
                _ => Err(TermError::InvalidStepSyntax {
                    term: text.to_string(),
                }),
            };
        }
        if text.contains(',') {
            return Ok(Shape::List(text));
        }
        if text.contains('-') {
            return Ok(Shape::Range(text));
        }
        Ok(Shape::Single(text))
    }
}

impl Term {
    /// Classify `text` and check it against `domain`.
    pub fn parse(text: &str, domain: &FieldDomain) -> Result<Term, TermError> {
        match Shape::classify(text)? {
            Shape::Wildcard => Ok(Term::Wildcard),
            Shape::SteppedWildcard { step } => Ok(Term::SteppedWildcard {
                step: parse_step(step)?,
            }),
            Shape::SteppedRange { range, step } => {
                let span = parse_range(range, domain)?;
                let step = parse_step(step)?;
                Ok(Term::SteppedRange { span, step })
            }
            Shape::List(list) => parse_list(list, domain).map(Term::List),
            Shape::Range(range) => parse_range(range, domain).map(Term::Range),
            Shape::Single(value) => parse_single(value, domain).map(Term::Single),
        }
    }
}

fn parse_step(text: &str) -> Result<i64, TermError> {
    match text.parse::<i64>() {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(TermError::InvalidStep {
            step: text.to_string(),
        }),
    }
}

/// Stops at the first failing element.
fn parse_list(text: &str, domain: &FieldDomain) -> Result<Vec<ListItem>, TermError> {
    text.split(',')
        .map(str::trim)
        .map(|item| {
            if item.contains('-') {
                parse_range(item, domain).map(ListItem::Range)
            } else {
                parse_single(item, domain).map(ListItem::Single)
            }
        })
        .collect()
}

/// Check a `start-end` pair against the field domain.
///
/// Ordering is checked before domain membership, so any `start > end` is
/// reported as [`TermError::InvalidRangeOrder`].
pub fn parse_range(text: &str, domain: &FieldDomain) -> Result<Span, TermError> {
    let parts: Vec<&str> = text.split('-').collect();
    let [start_s, end_s] = parts.as_slice() else {
        return Err(TermError::InvalidRangeSyntax {
            range: text.to_string(),
        });
    };

    let start = parse_bound(start_s, RangeBound::Start)?;
    let end = parse_bound(end_s, RangeBound::End)?;

    if start > end {
        return Err(TermError::InvalidRangeOrder { start, end });
    }
    check_bound(start, RangeBound::Start, domain)?;
    check_bound(end, RangeBound::End, domain)?;

    Ok(Span { start, end })
}

fn parse_bound(text: &str, bound: RangeBound) -> Result<i64, TermError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| TermError::InvalidRangeBound {
            bound,
            text: text.to_string(),
        })
}

fn check_bound(value: i64, bound: RangeBound, domain: &FieldDomain) -> Result<(), TermError> {
    if domain.contains(value) {
        Ok(())
    } else {
        Err(TermError::RangeBoundOutOfDomain {
            bound,
            value,
            min: domain.min,
            max: domain.max,
        })
    }
}

/// Check a bare value, accepting the field's alias value.
pub fn parse_single(text: &str, domain: &FieldDomain) -> Result<i64, TermError> {
    let value = text
        .trim()
        .parse::<i64>()
        .map_err(|_| TermError::InvalidValue {
            text: text.to_string(),
        })?;

    if domain.is_alias(value) || domain.contains(value) {
        Ok(value)
    } else {
        Err(TermError::ValueOutOfDomain {
            value,
            min: domain.min,
            max: domain.max,
        })
    }
}
